use schemadump_schema::{
    AtomicKind, ClassBinding, EnumBinding, FieldDescriptor, MetadataEntry, RawValue,
    SchemaSnapshot, SchemaSystem, TypeCategory, TypeDescriptor, TypeKind, TypeScope,
};

const SNAPSHOT_JSON: &str = r#"{
  "scopes": [
    {
      "name": "client.dll",
      "classes": [
        {
          "name": "C_BaseEntity",
          "size": 1024,
          "align": 8,
          "parent": "CEntityInstance",
          "metadata": [
            {"name": "MNetworkVarNames", "value": {"name_pair": {"type_name": "int32", "field_name": "m_iHealth"}}},
            {"name": "MNetworkVarsAtomic"}
          ],
          "fields": [
            {
              "name": "m_iHealth",
              "type": {"name": "int32", "category": "builtin"},
              "offset": 840,
              "metadata": [{"name": "MNetworkMinValue", "value": {"float": 0.0}}]
            },
            {
              "name": "m_hOwner",
              "type": {
                "name": "CHandle<C_BaseEntity>",
                "category": "atomic",
                "atomic": {
                  "kind": "t",
                  "outer": "CHandle",
                  "inner": {"name": "C_BaseEntity", "category": "declared_class", "class": "C_BaseEntity"}
                }
              },
              "offset": 848
            }
          ]
        }
      ],
      "enums": [
        {"name": "LifeState_t", "align": 1, "enumerators": [{"name": "LIFE_ALIVE", "value": 0}]}
      ]
    }
  ],
  "global": {"name": "GlobalTypes"}
}"#;

#[test]
fn test_parse_snapshot() {
    let snapshot = SchemaSnapshot::from_json(SNAPSHOT_JSON).expect("parse snapshot");
    let scopes = snapshot.type_scopes().expect("type scopes");
    assert_eq!(scopes.len(), 1);
    assert_eq!(snapshot.global_scope().expect("global").name, "GlobalTypes");

    let client = scopes[0];
    let entity = client
        .classes
        .iter()
        .find(|c| c.name == "C_BaseEntity").expect("C_BaseEntity");
    assert_eq!(entity.parent.as_deref(), Some("CEntityInstance"));
    assert_eq!(entity.metadata[1].value, RawValue::Empty);
    assert_eq!(
        entity.metadata[0].value.as_name_pair(),
        Some(("int32", "m_iHealth"))
    );

    let health = &entity.fields[0];
    assert_eq!(health.type_desc.category(), TypeCategory::Builtin);
    assert_eq!(health.metadata[0].value.as_float(), Some(0.0));

    let owner = &entity.fields[1];
    assert_eq!(owner.type_desc.category(), TypeCategory::Atomic);
    assert!(owner.metadata.is_empty());
    match &owner.type_desc.kind {
        TypeKind::Atomic {
            atomic: AtomicKind::T { inner, outer },
        } => {
            assert_eq!(outer.as_deref(), Some("CHandle"));
            assert_eq!(inner.declared_class_name(), Some("C_BaseEntity"));
        }
        other => panic!("unexpected kind {other:?}"),
    }

    let life_state = client
        .enums
        .iter()
        .find(|e| e.name == "LifeState_t").expect("LifeState_t");
    assert_eq!(life_state.enumerators[0].name, "LIFE_ALIVE");
}

#[test]
fn test_snapshot_survives_save_and_load() {
    let mut scope = TypeScope::new("server.dll");
    scope.classes.push(
        ClassBinding::new("CInfo", 40).with_field(
            FieldDescriptor::new(
                "m_names",
                TypeDescriptor::fixed_array(
                    TypeDescriptor::pointer(TypeDescriptor::builtin("char")),
                    4,
                ),
                8,
            )
            .with_metadata(MetadataEntry::new(
                "MScriptDescription",
                RawValue::Buffer(b"names\0\0\0".to_vec()),
            )),
        ),
    );
    scope
        .enums
        .push(EnumBinding::new("EMode", 8).with_enumerator("kInvalid", u64::MAX));
    let snapshot = SchemaSnapshot {
        scopes: vec![scope],
        global: TypeScope::new("GlobalTypes"),
    };

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, snapshot.to_json().expect("to_json")).expect("write");
    let loaded = SchemaSnapshot::load(&path).expect("load");
    assert_eq!(loaded, snapshot);
    assert_eq!(
        loaded.scopes[0].classes[0].fields[0].metadata[0]
            .value
            .as_buffer_str()
            .as_deref(),
        Some("names")
    );
    assert_eq!(loaded.scopes[0].enums[0].enumerators[0].value, u64::MAX);
}

#[test]
fn test_load_errors_name_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.json");
    let err = SchemaSnapshot::load(&missing).unwrap_err();
    assert!(format!("{err:#}").contains("missing.json"));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{\"scopes\": [").expect("write");
    let err = SchemaSnapshot::load(&broken).unwrap_err();
    assert!(format!("{err:#}").contains("broken.json"));
}

#[test]
fn test_raw_value_accessors() {
    assert_eq!(RawValue::Str(Some("x".into())).as_str(), Some("x"));
    assert_eq!(RawValue::Str(None).as_str(), None);
    assert_eq!(RawValue::Int(3).as_str(), None);
    assert_eq!(
        RawValue::Buffer(b"no terminator".to_vec()).as_buffer_str().as_deref(),
        Some("no terminator")
    );
    assert_eq!(RawValue::Int(-2).as_int(), Some(-2));
    assert_eq!(RawValue::Int(-2).as_float(), None);
    assert_eq!(RawValue::Float(2.5).as_float(), Some(2.5));
}
