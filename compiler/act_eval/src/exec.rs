//! The tree-walking executor.
//!
//! Single-threaded, synchronous, depth-first. The tag arena stays
//! immutable across runs; all per-run flow state (`executed`,
//! `forced_exit`, `reboot_loop`) lives in a parallel flag vector indexed by
//! [`TagId`]. Break/continue walk the enclosing-flow links upward, setting
//! `forced_exit` on every frame they pass through and stopping at the
//! nearest ancestor that can reboot (a `loop`/`doloop`); `continue` marks
//! that ancestor with `reboot_loop` instead, aborting only the remainder
//! of the current iteration.
//!
//! The executor raises no faults of its own; the only abort path is an
//! [`Interrupt`] from the action surface, which `?` propagates outward
//! through every nested frame.

use std::time::Duration;

use act_ir::{Comparator, Coord, ListValue, TagId, TagKind, TagTree, Value, Zone};
use tracing::{debug, trace};

use crate::env::VarStore;
use crate::surface::{ActionSurface, Interrupt};

/// Per-node runtime flow flags.
#[derive(Copy, Clone, Default)]
struct Flags {
    /// For `if`/`elif`: the chain has been satisfied at or before this node.
    executed: bool,
    /// A break walk passed through or stopped at this node.
    forced_exit: bool,
    /// A continue walk stopped at this (loop) node.
    reboot_loop: bool,
}

/// One run of one script. Owns the variable store; the tag tree and the
/// surface are borrowed for the duration of the run.
pub struct Executor<'a, S: ActionSurface> {
    tree: &'a TagTree,
    surface: &'a mut S,
    vars: VarStore,
    flags: Vec<Flags>,
}

impl<'a, S: ActionSurface> Executor<'a, S> {
    pub fn new(tree: &'a TagTree, surface: &'a mut S) -> Self {
        Executor {
            tree,
            surface,
            vars: VarStore::new(),
            flags: vec![Flags::default(); tree.len()],
        }
    }

    /// Run the script's root form once.
    pub fn run(&mut self) -> Result<(), Interrupt> {
        let Some(root) = self.tree.root() else {
            return Ok(());
        };
        debug!("script run starting");
        self.exec(root)?;
        debug!(vars = self.vars.len(), "script run finished");
        Ok(())
    }

    fn exec(&mut self, id: TagId) -> Result<(), Interrupt> {
        self.surface.poll()?;
        let tree = self.tree;
        let tag = tree.get(id);
        trace!(tag = tag.kind.text(), line = tag.line, "executing");
        match &tag.kind {
            TagKind::Main { body } => {
                self.run_body(id, body)?;
                // A top-level break ends the script.
                self.flags[id.index()].forced_exit = false;
            }
            TagKind::If { cond, body } => {
                let hit = self.eval_bool(*cond)?;
                self.flags[id.index()].executed = hit;
                if hit {
                    self.run_body(id, body)?;
                    self.flags[id.index()].forced_exit = false;
                }
            }
            TagKind::Elif { cond, body } => {
                if self.chain_satisfied(tag.prev) {
                    self.flags[id.index()].executed = true;
                } else {
                    let hit = self.eval_bool(*cond)?;
                    self.flags[id.index()].executed = hit;
                    if hit {
                        self.run_body(id, body)?;
                        self.flags[id.index()].forced_exit = false;
                    }
                }
            }
            TagKind::Else { body } => {
                if !self.chain_satisfied(tag.prev) {
                    self.run_body(id, body)?;
                    self.flags[id.index()].forced_exit = false;
                }
            }
            TagKind::Loop { cond, body } => {
                // Pre-test loop: re-check the condition before every pass.
                while self.eval_bool(*cond)? {
                    self.surface.poll()?;
                    self.run_body(id, body)?;
                    if self.finish_iteration(id) {
                        break;
                    }
                }
            }
            TagKind::DoLoop { cond, body } => {
                // Post-test loop: the body runs at least once.
                loop {
                    self.surface.poll()?;
                    self.run_body(id, body)?;
                    if self.finish_iteration(id) {
                        break;
                    }
                    if !self.eval_bool(*cond)? {
                        break;
                    }
                }
            }
            TagKind::Break => self.break_walk(tag.parent),
            TagKind::Continue => self.continue_walk(tag.parent),
            TagKind::Store { name, value } => {
                let value = self.eval(*value)?;
                self.vars.set(name, value);
            }
            TagKind::Wait { amount, unit } => {
                let millis = match self.eval(*amount)? {
                    Value::Float(f) => (f * unit.millis() as f64).trunc().max(0.0) as u64,
                    value => value.int().max(0) as u64 * unit.millis(),
                };
                self.surface.suspend(Duration::from_millis(millis))?;
            }
            TagKind::Print { items } => {
                for &item in items {
                    let value = self.eval(item)?;
                    self.surface.emit(&value.to_string())?;
                }
            }
            // A value form as a statement: evaluate and discard.
            _ => {
                self.eval(id)?;
            }
        }
        Ok(())
    }

    /// Execute a flow body in order, stopping early once a break or
    /// continue walk has flagged this node.
    fn run_body(&mut self, me: TagId, body: &[TagId]) -> Result<(), Interrupt> {
        for &child in body {
            self.exec(child)?;
            let flags = self.flags[me.index()];
            if flags.forced_exit || flags.reboot_loop {
                break;
            }
        }
        Ok(())
    }

    /// Clear per-iteration flags; returns `true` when the loop must stop.
    fn finish_iteration(&mut self, id: TagId) -> bool {
        let flags = &mut self.flags[id.index()];
        flags.reboot_loop = false;
        if flags.forced_exit {
            flags.forced_exit = false;
            true
        } else {
            false
        }
    }

    /// Whether the `if`/`elif` chain already fired at or before `prev`.
    fn chain_satisfied(&self, prev: Option<TagId>) -> bool {
        prev.is_some_and(|p| self.flags[p.index()].executed)
    }

    /// `break`: flag every enclosing frame up to and including the nearest
    /// reboot-capable ancestor.
    fn break_walk(&mut self, start: Option<TagId>) {
        let mut current = start;
        while let Some(id) = current {
            self.flags[id.index()].forced_exit = true;
            let node = self.tree.get(id);
            if node.kind.can_reboot() {
                break;
            }
            current = node.parent;
        }
    }

    /// `continue`: like break on the frames passed through, but the
    /// stopping loop reboots instead of exiting.
    fn continue_walk(&mut self, start: Option<TagId>) {
        let mut current = start;
        while let Some(id) = current {
            let node = self.tree.get(id);
            if node.kind.can_reboot() {
                self.flags[id.index()].reboot_loop = true;
                break;
            }
            self.flags[id.index()].forced_exit = true;
            current = node.parent;
        }
    }

    fn eval_bool(&mut self, id: TagId) -> Result<bool, Interrupt> {
        Ok(self.eval(id)?.truth())
    }

    /// Compute a value tag.
    fn eval(&mut self, id: TagId) -> Result<Value, Interrupt> {
        let tree = self.tree;
        match &tree.get(id).kind {
            TagKind::Literal(value) => Ok(value.clone()),
            TagKind::Load { name, ty } => Ok(self.vars.load(name, *ty)),
            TagKind::Cast { to, inner } => Ok(self.eval(*inner)?.convert(*to)),
            TagKind::CoordPair { x, y } => {
                let x = self.eval(*x)?.int();
                let y = self.eval(*y)?.int();
                Ok(Value::Coord(Coord::new(x, y)))
            }
            TagKind::ZoneCorners {
                top_left,
                bottom_right,
            } => {
                let top_left = self.eval(*top_left)?.coord();
                let bottom_right = self.eval(*bottom_right)?.coord();
                Ok(Value::Zone(Zone::new(top_left, bottom_right)))
            }
            TagKind::List { elem, items } => {
                let values = self.flatten(items)?;
                Ok(Value::List(ListValue::new(*elem, values)))
            }
            TagKind::And { items } => {
                // True unless any operand is false; stops at the first false.
                for &item in items {
                    if !self.eval_bool(item)? {
                        return Ok(Value::Bool(false));
                    }
                }
                Ok(Value::Bool(true))
            }
            TagKind::Or { items } => {
                // True if any operand is true; stops at the first true.
                for &item in items {
                    if self.eval_bool(item)? {
                        return Ok(Value::Bool(true));
                    }
                }
                Ok(Value::Bool(false))
            }
            TagKind::Not { inner } => Ok(Value::Bool(!self.eval_bool(*inner)?)),
            TagKind::Compare { cmp, items } => {
                let values = self.flatten(items)?;
                Ok(Value::Bool(fold_pairs(*cmp, &values)))
            }
            // Statement tags never appear in value position; the parser's
            // typing guarantees it.
            _ => Ok(Value::Bool(false)),
        }
    }

    /// Evaluate operands into one flattened sequence: list operands are
    /// spliced, scalars appended.
    fn flatten(&mut self, items: &[TagId]) -> Result<Vec<Value>, Interrupt> {
        let mut values = Vec::with_capacity(items.len());
        for &item in items {
            match self.eval(item)? {
                Value::List(list) => values.extend(list.items),
                value => values.push(value),
            }
        }
        Ok(values)
    }
}

/// Adjacent-pair fold: the comparison holds for the whole sequence when
/// every consecutive pair satisfies it. Zero or one element is vacuously
/// true for every comparator.
fn fold_pairs(cmp: Comparator, values: &[Value]) -> bool {
    values.windows(2).all(|pair| holds(cmp, &pair[0], &pair[1]))
}

fn holds(cmp: Comparator, a: &Value, b: &Value) -> bool {
    match cmp {
        Comparator::Equal => a == b,
        Comparator::NotEqual => a != b,
        // Ordering comparators are numeric-only (enforced at parse time);
        // int pairs compare exactly, anything else through f64.
        Comparator::Greater | Comparator::Lesser | Comparator::GreaterEqual
        | Comparator::LesserEqual => {
            if let (Value::Int(a), Value::Int(b)) = (a, b) {
                ordered(cmp, *a, *b)
            } else {
                ordered(cmp, a.float(), b.float())
            }
        }
    }
}

fn ordered<T: PartialOrd>(cmp: Comparator, a: T, b: T) -> bool {
    match cmp {
        Comparator::Greater => a > b,
        Comparator::Lesser => a < b,
        Comparator::GreaterEqual => a >= b,
        Comparator::LesserEqual => a <= b,
        Comparator::Equal => a == b,
        Comparator::NotEqual => a != b,
    }
}
