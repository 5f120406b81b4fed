//! Emission order of the classes of a scope
//!
//! A class should come after its base class and after every class it holds by value, so that a
//! single-pass consumer never meets an undeclared name. Reference cycles are legal in the host's
//! type system; classes that depend on each other keep their relative order and the consumer is
//! expected to forward declare them.
use log::{debug, warn};
use schemadump_schema::ClassBinding;
use std::collections::{HashMap, HashSet};

#[derive(Debug)]
struct DependencyNode {
    // resolved base class and classes used as direct field types
    refs: HashSet<usize>,
}

impl DependencyNode {
    fn depends_on(&self, other: usize) -> bool {
        self.refs.contains(&other)
    }
}

fn make_dependency_nodes(classes: &[ClassBinding]) -> Vec<DependencyNode> {
    let mut by_name: HashMap<&str, usize> = HashMap::new();
    for (index, class) in classes.iter().enumerate() {
        by_name.entry(class.name.as_str()).or_insert(index);
    }
    classes
        .iter()
        .map(|class| {
            let parent = class
                .parent
                .as_deref()
                .and_then(|name| by_name.get(name).copied());
            let mut refs: HashSet<usize> = parent.into_iter().collect();
            // pointers and arrays are not unwrapped: only fields whose own type is a declared
            // class count
            refs.extend(
                class
                    .fields
                    .iter()
                    .filter_map(|field| field.type_desc.declared_class_name())
                    .filter_map(|name| by_name.get(name).copied()),
            );
            DependencyNode { refs }
        })
        .collect()
}

/// Swaps dependent pairs until a full pass leaves the sequence unchanged.
///
/// Returns the sequence and whether it settled. Acyclic inputs settle well within `max_passes`;
/// the bound only stops cycles whose swaps keep undoing each other.
fn relax_order(nodes: &[DependencyNode], max_passes: usize) -> (Vec<usize>, bool) {
    let mut sequence: Vec<usize> = (0..nodes.len()).collect();
    let mut nb_passes = 0;
    loop {
        let mut nb_swaps = 0;
        for first in 0..sequence.len() {
            for second in 0..sequence.len() {
                if first == second {
                    continue;
                }
                let first_depends = nodes[sequence[first]].depends_on(sequence[second]);
                let second_depends = nodes[sequence[second]].depends_on(sequence[first]);
                if first_depends && second_depends {
                    continue;
                }
                let swap = if first < second {
                    first_depends
                } else {
                    second_depends
                };
                if swap {
                    sequence.swap(first, second);
                    nb_swaps += 1;
                }
            }
        }
        nb_passes += 1;
        if nb_swaps == 0 {
            debug!(
                "ordered {} classes in {nb_passes} passes",
                sequence.len()
            );
            return (sequence, true);
        }
        if nb_passes >= max_passes {
            warn!(
                "class order still changing after {nb_passes} passes ({nb_swaps} swaps in the last one), keeping it as is"
            );
            return (sequence, false);
        }
    }
}

/// Returns every class of the slice exactly once, dependencies first where cycles allow it.
/// The result only depends on the input order.
pub fn order_classes(classes: &[ClassBinding]) -> Vec<&ClassBinding> {
    let nodes = make_dependency_nodes(classes);
    let (sequence, _settled) = relax_order(&nodes, nodes.len() + 1);
    sequence
        .into_iter()
        .map(|index| &classes[index])
        .collect()
}
