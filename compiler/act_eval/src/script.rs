//! The compiled-script facade.
//!
//! A [`Script`] holds one lowered tag tree. The tree is built once per
//! script load and may run any number of times; every run gets a fresh
//! variable store, whose lifetime is exactly that run.

use act_ir::{Form, TagTree};

use crate::exec::Executor;
use crate::lower::lower;
use crate::surface::{ActionSurface, Interrupt};

pub struct Script {
    tree: TagTree,
}

impl Script {
    /// Lower a successfully parsed script form into an executable script.
    pub fn from_form(root: &Form) -> Self {
        Script { tree: lower(root) }
    }

    /// The lowered tag tree.
    pub fn tags(&self) -> &TagTree {
        &self.tree
    }

    /// Execute once against the given action surface.
    pub fn run<S: ActionSurface>(&self, surface: &mut S) -> Result<(), Interrupt> {
        Executor::new(&self.tree, surface).run()
    }
}
