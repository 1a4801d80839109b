//! Small trees shared by the test suites and benchmarks.

use std::rc::Rc;

use stagecraft_core::{add_child, Container, NodeError, NodeRef, Quad};
use stagecraft_ui::{LayoutContainer, LayoutLeaf};
use stagecraft_ui_graphics::Color;

use crate::enable_probe::EnableProbe;
use crate::probe::{ProbePolicy, StackPolicy};

/// A straight line of stacking containers ending in a probed leaf.
pub struct Chain {
    /// Outermost first.
    pub containers: Vec<Rc<LayoutContainer>>,
    pub policies: Vec<Rc<StackPolicy>>,
    pub leaf: Rc<LayoutLeaf>,
    pub probe: Rc<ProbePolicy>,
}

impl Chain {
    pub fn root(&self) -> NodeRef {
        match self.containers.first() {
            Some(root) => root.clone() as NodeRef,
            None => self.leaf.clone(),
        }
    }
}

/// Builds `depth` nested [`StackPolicy`] containers with a leaf at the bottom.
pub fn build_chain(depth: usize) -> Result<Chain, NodeError> {
    let probe = ProbePolicy::new();
    let leaf = LayoutLeaf::with_policy(probe.clone());

    let mut containers = Vec::with_capacity(depth);
    let mut policies = Vec::with_capacity(depth);
    for _ in 0..depth {
        let policy = StackPolicy::new();
        containers.push(LayoutContainer::with_policy(policy.clone()));
        policies.push(policy);
    }

    for pair in containers.windows(2) {
        add_child(&*pair[0], pair[1].clone())?;
    }
    if let Some(innermost) = containers.last() {
        add_child(&**innermost, leaf.clone())?;
    }

    Ok(Chain {
        containers,
        policies,
        leaf,
        probe,
    })
}

/// A layout container whose probes sit at different depths.
pub struct EnableScene {
    pub root: Rc<LayoutContainer>,
    /// The layout container nested inside `root`.
    pub inner: Rc<LayoutContainer>,
    /// Every probe in the tree: one directly under `root`, two behind plain
    /// groups, one under `inner`.
    pub probes: Vec<Rc<EnableProbe>>,
}

/// Builds:
///
/// ```text
/// root (LayoutContainer)
/// ├── probe
/// ├── Container
/// │   ├── probe
/// │   ├── Quad
/// │   └── Container
/// │       └── probe
/// └── inner (LayoutContainer)
///     └── probe
/// ```
pub fn build_enable_scene() -> Result<EnableScene, NodeError> {
    let probes: Vec<Rc<EnableProbe>> = (0..4).map(|_| EnableProbe::new()).collect();

    let root = LayoutContainer::new();
    let outer_group = Container::new();
    let inner_group = Container::new();
    let inner = LayoutContainer::new();

    add_child(&*root, probes[0].clone())?;
    add_child(&*root, outer_group.clone())?;
    add_child(&*outer_group, probes[1].clone())?;
    add_child(&*outer_group, Quad::new(Color::WHITE))?;
    add_child(&*outer_group, inner_group.clone())?;
    add_child(&*inner_group, probes[2].clone())?;
    add_child(&*root, inner.clone())?;
    add_child(&*inner, probes[3].clone())?;

    Ok(EnableScene {
        root,
        inner,
        probes,
    })
}
