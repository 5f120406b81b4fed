use thiserror::Error;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("schema system unavailable: {0}")]
    SchemaUnavailable(String),

    #[error("type tree of {type_name} is deeper than {limit} levels")]
    TypeTooDeep { type_name: String, limit: usize },
}
