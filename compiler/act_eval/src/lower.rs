//! Lowering: form tree to tag tree.
//!
//! Runs once per script load. Forms whose operands are all literal are
//! pre-baked -- computed here, stored as [`TagKind::Literal`], and never
//! re-evaluated -- while everything else keeps its child expressions and is
//! recomputed on each execution. Flow nodes are wired with their enclosing
//! flow tag and, for `elif`/`else`, their chain predecessor; depths follow
//! the structural parent.

use act_ir::{
    Coord, Form, FormKind, ListValue, PairArgs, Tag, TagId, TagKind, TagTree, Value, ValueKind,
    Zone,
};
use tracing::debug;

/// Lower a parsed script (its root `main` form) into an executable tree.
pub fn lower(root: &Form) -> TagTree {
    let mut lowerer = Lowerer {
        tree: TagTree::new(),
    };
    let mut chain = None;
    let root_id = lowerer.stmt(root, None, 0, &mut chain);
    lowerer.tree.set_root(root_id);
    debug!(tags = lowerer.tree.len(), "lowered script");
    lowerer.tree
}

struct Lowerer {
    tree: TagTree,
}

impl Lowerer {
    /// Lower a statement. `parent` is the enclosing flow tag, `chain` the
    /// previous `if`/`elif` sibling still eligible for chaining.
    fn stmt(
        &mut self,
        form: &Form,
        parent: Option<TagId>,
        depth: u32,
        chain: &mut Option<TagId>,
    ) -> TagId {
        let prev_chain = chain.take();
        match &form.kind {
            FormKind::Main { body } => self.flow(form, parent, depth, None, |this, id| {
                let body = this.block(body, id, depth + 1);
                TagKind::Main { body }
            }),
            FormKind::If { cond, body } => {
                let id = self.flow(form, parent, depth, None, |this, id| {
                    let cond = this.expr(cond, Some(id), depth + 1);
                    let body = this.block(body, id, depth + 1);
                    TagKind::If { cond, body }
                });
                *chain = Some(id);
                id
            }
            FormKind::Elif { cond, body } => {
                let id = self.flow(form, parent, depth, prev_chain, |this, id| {
                    let cond = this.expr(cond, Some(id), depth + 1);
                    let body = this.block(body, id, depth + 1);
                    TagKind::Elif { cond, body }
                });
                *chain = Some(id);
                id
            }
            FormKind::Else { body } => self.flow(form, parent, depth, prev_chain, |this, id| {
                let body = this.block(body, id, depth + 1);
                TagKind::Else { body }
            }),
            FormKind::Loop { cond, body } => self.flow(form, parent, depth, None, |this, id| {
                let cond = this.expr(cond, Some(id), depth + 1);
                let body = this.block(body, id, depth + 1);
                TagKind::Loop { cond, body }
            }),
            FormKind::DoLoop { cond, body } => self.flow(form, parent, depth, None, |this, id| {
                let cond = this.expr(cond, Some(id), depth + 1);
                let body = this.block(body, id, depth + 1);
                TagKind::DoLoop { cond, body }
            }),
            FormKind::Break => self.push(form, TagKind::Break, parent, depth),
            FormKind::Continue => self.push(form, TagKind::Continue, parent, depth),
            FormKind::Store { name, value } => {
                let value = self.expr(value, parent, depth + 1);
                self.push(
                    form,
                    TagKind::Store {
                        name: name.clone(),
                        value,
                    },
                    parent,
                    depth,
                )
            }
            FormKind::Wait { amount, unit } => {
                let amount = self.expr(amount, parent, depth + 1);
                self.push(
                    form,
                    TagKind::Wait {
                        amount,
                        unit: *unit,
                    },
                    parent,
                    depth,
                )
            }
            FormKind::Print(items) => {
                let items = items
                    .iter()
                    .map(|item| self.expr(item, parent, depth + 1))
                    .collect();
                self.push(form, TagKind::Print { items }, parent, depth)
            }
            // A bare expression statement: evaluated, value discarded.
            _ => self.expr(form, parent, depth),
        }
    }

    /// Push a flow node, lower its children with the node's id as their
    /// enclosing flow tag, then patch the real kind in.
    fn flow(
        &mut self,
        form: &Form,
        parent: Option<TagId>,
        depth: u32,
        prev: Option<TagId>,
        build: impl FnOnce(&mut Self, TagId) -> TagKind,
    ) -> TagId {
        // Placeholder kind until the children exist and real ids are known.
        let id = self.tree.push(Tag {
            kind: TagKind::Break,
            line: form.line,
            depth,
            parent,
            prev,
        });
        let kind = build(self, id);
        self.tree.get_mut(id).kind = kind;
        id
    }

    fn block(&mut self, body: &[Form], parent: TagId, depth: u32) -> Vec<TagId> {
        let mut chain = None;
        body.iter()
            .map(|stmt| self.stmt(stmt, Some(parent), depth, &mut chain))
            .collect()
    }

    fn push(&mut self, form: &Form, kind: TagKind, parent: Option<TagId>, depth: u32) -> TagId {
        self.tree.push(Tag {
            kind,
            line: form.line,
            depth,
            parent,
            prev: None,
        })
    }

    /// Lower an expression; literal-only subtrees pre-bake to one tag.
    fn expr(&mut self, form: &Form, parent: Option<TagId>, depth: u32) -> TagId {
        if let Some(value) = fold(form) {
            return self.push(form, TagKind::Literal(value), parent, depth);
        }
        match &form.kind {
            FormKind::Ident { name, ty: Some(ty) } => self.push(
                form,
                TagKind::Load {
                    name: name.clone(),
                    ty: *ty,
                },
                parent,
                depth,
            ),
            FormKind::Int(Some(inner)) => self.cast(form, ValueKind::Int, inner, parent, depth),
            FormKind::Float(Some(inner)) => self.cast(form, ValueKind::Float, inner, parent, depth),
            FormKind::Bool(Some(inner)) => self.cast(form, ValueKind::Bool, inner, parent, depth),
            FormKind::Str(Some(inner)) => self.cast(form, ValueKind::Str, inner, parent, depth),
            FormKind::Direction(Some(inner)) => {
                self.cast(form, ValueKind::Direction, inner, parent, depth)
            }
            FormKind::Coord(PairArgs::Wrap(inner)) => {
                self.cast(form, ValueKind::Coord, inner, parent, depth)
            }
            FormKind::Coord(PairArgs::Pair(x, y)) => {
                let x = self.expr(x, parent, depth + 1);
                let y = self.expr(y, parent, depth + 1);
                self.push(form, TagKind::CoordPair { x, y }, parent, depth)
            }
            FormKind::Zone(PairArgs::Wrap(inner)) => {
                self.cast(form, ValueKind::Zone, inner, parent, depth)
            }
            FormKind::Zone(PairArgs::Pair(top_left, bottom_right)) => {
                let top_left = self.expr(top_left, parent, depth + 1);
                let bottom_right = self.expr(bottom_right, parent, depth + 1);
                self.push(
                    form,
                    TagKind::ZoneCorners {
                        top_left,
                        bottom_right,
                    },
                    parent,
                    depth,
                )
            }
            FormKind::List { elem, items } => {
                let items = self.exprs(items, parent, depth);
                self.push(
                    form,
                    TagKind::List {
                        elem: *elem,
                        items,
                    },
                    parent,
                    depth,
                )
            }
            FormKind::And(items) => {
                let items = self.exprs(items, parent, depth);
                self.push(form, TagKind::And { items }, parent, depth)
            }
            FormKind::Or(items) => {
                let items = self.exprs(items, parent, depth);
                self.push(form, TagKind::Or { items }, parent, depth)
            }
            FormKind::Not(inner) => {
                let inner = self.expr(inner, parent, depth + 1);
                self.push(form, TagKind::Not { inner }, parent, depth)
            }
            FormKind::Compare {
                cmp: Some(cmp),
                items,
            } => {
                let items = self.exprs(items, parent, depth);
                self.push(
                    form,
                    TagKind::Compare {
                        cmp: *cmp,
                        items,
                    },
                    parent,
                    depth,
                )
            }
            // Argument-only literals and unresolved names are inert when
            // they appear as bare statements.
            FormKind::TimeLit(_) | FormKind::CmpLit(_) | FormKind::Ident { ty: None, .. } => {
                self.push(form, TagKind::Literal(Value::Bool(false)), parent, depth)
            }
            // Anything left is statement-shaped; lower it as one.
            _ => {
                let mut chain = None;
                self.stmt(form, parent, depth, &mut chain)
            }
        }
    }

    fn exprs(&mut self, forms: &[Form], parent: Option<TagId>, depth: u32) -> Vec<TagId> {
        forms
            .iter()
            .map(|form| self.expr(form, parent, depth + 1))
            .collect()
    }

    fn cast(
        &mut self,
        form: &Form,
        to: ValueKind,
        inner: &Form,
        parent: Option<TagId>,
        depth: u32,
    ) -> TagId {
        let inner = self.expr(inner, parent, depth + 1);
        self.push(form, TagKind::Cast { to, inner }, parent, depth)
    }
}

/// Compute a form's value when every reachable operand is literal.
fn fold(form: &Form) -> Option<Value> {
    match &form.kind {
        FormKind::IntLit(n) => Some(Value::Int(*n)),
        FormKind::BoolLit(b) => Some(Value::Bool(*b)),
        FormKind::StrLit(s) => Some(Value::Str(s.clone())),
        FormKind::DirectionLit(d) => Some(Value::Direction(*d)),
        FormKind::Int(inner) => fold_cast(inner.as_deref(), ValueKind::Int),
        FormKind::Float(inner) => fold_cast(inner.as_deref(), ValueKind::Float),
        FormKind::Bool(inner) => fold_cast(inner.as_deref(), ValueKind::Bool),
        FormKind::Str(inner) => fold_cast(inner.as_deref(), ValueKind::Str),
        FormKind::Direction(inner) => fold_cast(inner.as_deref(), ValueKind::Direction),
        FormKind::Coord(args) => match args {
            PairArgs::Empty => Some(Value::Coord(Coord::default())),
            PairArgs::Wrap(inner) => fold(inner),
            PairArgs::Pair(x, y) => {
                let (x, y) = (fold(x)?, fold(y)?);
                Some(Value::Coord(Coord::new(x.int(), y.int())))
            }
        },
        FormKind::Zone(args) => match args {
            PairArgs::Empty => Some(Value::Zone(Zone::default())),
            PairArgs::Wrap(inner) => fold(inner),
            PairArgs::Pair(a, b) => {
                let (a, b) = (fold(a)?, fold(b)?);
                Some(Value::Zone(Zone::new(a.coord(), b.coord())))
            }
        },
        FormKind::List { elem, items } => {
            let mut flattened = Vec::new();
            for item in items {
                match fold(item)? {
                    Value::List(list) => flattened.extend(list.items),
                    value => flattened.push(value),
                }
            }
            Some(Value::List(ListValue::new(*elem, flattened)))
        }
        // compare() with no operands is vacuously true.
        FormKind::Compare { cmp: None, .. } => Some(Value::Bool(true)),
        _ => None,
    }
}

fn fold_cast(inner: Option<&Form>, to: ValueKind) -> Option<Value> {
    match inner {
        None => Some(Value::default_for(act_ir::ValueType::scalar(to))),
        Some(inner) => Some(fold(inner)?.convert(to)),
    }
}
