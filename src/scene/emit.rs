//! Scene emitter: applies freshly computed node specs to a retained layer

use std::collections::HashMap;

use tracing::debug;

use super::join::join;
use super::{Attributes, Node, NodeId, NodeKind, Scene};

/// Desired state of one node after a render
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub key: usize,
    pub kind: NodeKind,
    pub class: &'static str,
    pub attrs: Attributes,
    pub text: Option<String>,
}

/// Enter/update/exit counts for one layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinStats {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// Reconciliation counts for a whole render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub shapes: JoinStats,
    pub labels: JoinStats,
}

impl RenderStats {
    /// True when no node entered, updated or exited
    pub fn is_noop(&self) -> bool {
        *self == RenderStats::default()
    }
}

impl Scene {
    /// Reconcile both layers against freshly computed specs
    pub fn reconcile(&mut self, shapes: Vec<NodeSpec>, labels: Vec<NodeSpec>) -> RenderStats {
        RenderStats {
            shapes: emit_layer(&mut self.shapes, shapes, &mut self.next_id),
            labels: emit_layer(&mut self.labels, labels, &mut self.next_id),
        }
    }
}

/// Reconcile `layer` against `specs`.
///
/// Nodes whose key survives are updated in place and keep their [`NodeId`];
/// every attribute of the spec is re-applied regardless of whether it
/// changed. New keys create nodes, vanished keys remove them. The layer ends
/// up in spec order.
pub fn emit_layer(layer: &mut Vec<Node>, specs: Vec<NodeSpec>, next_id: &mut u64) -> JoinStats {
    let old_keys: Vec<usize> = layer.iter().map(|n| n.key).collect();
    let new_keys: Vec<usize> = specs.iter().map(|s| s.key).collect();
    let plan = join(&old_keys, &new_keys);

    let mut retained: HashMap<usize, Node> = layer.drain(..).map(|n| (n.key, n)).collect();
    for key in &plan.exit {
        retained.remove(key);
    }

    let mut nodes = Vec::with_capacity(specs.len());
    for spec in specs {
        let node = match retained.remove(&spec.key) {
            Some(mut node) => {
                node.kind = spec.kind;
                node.class = spec.class;
                for (name, value) in spec.attrs.iter() {
                    node.attrs.set(name, value);
                }
                node.text = spec.text;
                node
            }
            None => {
                let id = NodeId(*next_id);
                *next_id += 1;
                Node {
                    id,
                    key: spec.key,
                    kind: spec.kind,
                    class: spec.class,
                    attrs: spec.attrs,
                    text: spec.text,
                }
            }
        };
        nodes.push(node);
    }
    *layer = nodes;

    let stats = JoinStats {
        entered: plan.enter.len(),
        updated: plan.update.len(),
        exited: plan.exit.len(),
    };
    debug!(
        entered = stats.entered,
        updated = stats.updated,
        exited = stats.exited,
        "layer reconciled"
    );
    stats
}
