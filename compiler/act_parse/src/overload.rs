//! Argument-overload resolution.
//!
//! Each keyword registers one or more [`Signature`]s -- admissible argument
//! type sequences. As the parser finishes each argument it offers the
//! argument's type to every still-valid candidate: a candidate is
//! permanently invalidated the first time the offered type fails to match
//! the slot at its cursor, and becomes completed once its cursor has
//! consumed every required slot (immediately for empty and zero-minimum
//! repeatable signatures). The form is accepted only if the closing `)` is
//! reached with at least one completed candidate; the lowest-registered
//! completed candidate decides which concrete form gets built.

use act_ir::{ValueKind, ValueType};
use smallvec::SmallVec;

/// One expected argument slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ArgSpec {
    /// Exactly this type.
    Ty(ValueType),
    /// A scalar of this kind, or a list of it -- the flattening positions of
    /// `list` and `compare`.
    Elem(ValueKind),
    /// A bare identifier (the target slot of `store`).
    Name,
}

impl ArgSpec {
    fn matches(self, arg: &ArgInfo) -> bool {
        match self {
            ArgSpec::Ty(ty) => arg.ty == Some(ty),
            ArgSpec::Elem(kind) => matches!(arg.ty, Some(t) if t.kind == kind),
            ArgSpec::Name => arg.is_name,
        }
    }

    /// The type shown in diagnostics for this slot.
    fn display_type(self) -> ValueType {
        match self {
            ArgSpec::Ty(ty) => ty,
            ArgSpec::Elem(kind) => ValueType::scalar(kind),
            ArgSpec::Name => ValueType::IDENTIFIER,
        }
    }
}

/// What the parser knows about one finished argument.
#[derive(Clone, Debug)]
pub struct ArgInfo {
    /// The argument's value type; `None` for statement forms and
    /// unresolved identifiers.
    pub ty: Option<ValueType>,
    /// Whether the argument is a bare identifier token.
    pub is_name: bool,
}

/// One admissible argument-type sequence: fixed slots, optionally followed
/// by a repeatable slot with a minimum arity.
#[derive(Debug)]
pub struct Signature {
    pub required: &'static [ArgSpec],
    pub repeat: Option<ArgSpec>,
    pub min_repeat: usize,
}

impl Signature {
    pub const fn empty() -> Self {
        Signature::fixed(&[])
    }

    pub const fn fixed(required: &'static [ArgSpec]) -> Self {
        Signature {
            required,
            repeat: None,
            min_repeat: 0,
        }
    }

    pub const fn variadic(repeat: ArgSpec, min_repeat: usize) -> Self {
        Signature {
            required: &[],
            repeat: Some(repeat),
            min_repeat,
        }
    }

    pub const fn with_tail(required: &'static [ArgSpec], repeat: ArgSpec) -> Self {
        Signature {
            required,
            repeat: Some(repeat),
            min_repeat: 0,
        }
    }
}

/// Per-candidate cursor state.
struct Candidate {
    sig: &'static Signature,
    taken: usize,
    valid: bool,
    completed: bool,
}

impl Candidate {
    fn new(sig: &'static Signature) -> Self {
        let mut candidate = Candidate {
            sig,
            taken: 0,
            valid: true,
            completed: false,
        };
        candidate.completed = candidate.complete_at(0);
        candidate
    }

    /// The slot the cursor points at, `None` once the sequence is spent.
    fn expected(&self) -> Option<ArgSpec> {
        if self.taken < self.sig.required.len() {
            Some(self.sig.required[self.taken])
        } else {
            self.sig.repeat
        }
    }

    fn complete_at(&self, taken: usize) -> bool {
        if taken < self.sig.required.len() {
            return false;
        }
        match self.sig.repeat {
            None => taken == self.sig.required.len(),
            Some(_) => taken - self.sig.required.len() >= self.sig.min_repeat,
        }
    }

    fn approve(&mut self, arg: &ArgInfo) -> bool {
        if !self.valid {
            return false;
        }
        match self.expected() {
            Some(spec) if spec.matches(arg) => {
                self.taken += 1;
                self.completed = self.complete_at(self.taken);
                true
            }
            _ => {
                self.valid = false;
                self.completed = false;
                false
            }
        }
    }
}

/// The live candidate set for one argument list.
pub struct OverloadSet {
    candidates: SmallVec<[Candidate; 8]>,
}

impl OverloadSet {
    pub fn new(signatures: &'static [Signature]) -> Self {
        OverloadSet {
            candidates: signatures.iter().map(Candidate::new).collect(),
        }
    }

    /// Offer one argument's type to every still-valid candidate.
    /// Returns `false` when no candidate accepted it.
    pub fn approve(&mut self, arg: &ArgInfo) -> bool {
        let mut accepted = false;
        for candidate in &mut self.candidates {
            if candidate.approve(arg) {
                accepted = true;
            }
        }
        accepted
    }

    /// The lowest-registered completed candidate, the one that decides
    /// which concrete form to build.
    pub fn winner(&self) -> Option<usize> {
        self.candidates
            .iter()
            .position(|c| c.valid && c.completed)
    }

    /// Types acceptable at the current cursor positions, for diagnostics.
    pub fn expected_types(&self) -> Vec<ValueType> {
        let mut types = Vec::new();
        for candidate in self.candidates.iter().filter(|c| c.valid) {
            if let Some(spec) = candidate.expected() {
                let ty = spec.display_type();
                if !types.contains(&ty) {
                    types.push(ty);
                }
            }
        }
        types
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn arg(ty: ValueType) -> ArgInfo {
        ArgInfo {
            ty: Some(ty),
            is_name: false,
        }
    }

    fn name_arg() -> ArgInfo {
        ArgInfo {
            ty: None,
            is_name: true,
        }
    }

    static WAIT: [Signature; 2] = [
        Signature::fixed(&[
            ArgSpec::Ty(ValueType::INT),
            ArgSpec::Ty(ValueType::TIME_UNIT),
        ]),
        Signature::fixed(&[
            ArgSpec::Ty(ValueType::FLOAT),
            ArgSpec::Ty(ValueType::TIME_UNIT),
        ]),
    ];

    #[test]
    fn disambiguates_by_first_argument() {
        let mut set = OverloadSet::new(&WAIT);
        assert!(set.approve(&arg(ValueType::FLOAT)));
        assert!(set.approve(&arg(ValueType::TIME_UNIT)));
        assert_eq!(set.winner(), Some(1));
    }

    #[test]
    fn selection_is_deterministic_across_repeated_resolution() {
        for _ in 0..3 {
            let mut set = OverloadSet::new(&WAIT);
            set.approve(&arg(ValueType::INT));
            set.approve(&arg(ValueType::TIME_UNIT));
            assert_eq!(set.winner(), Some(0));
        }
    }

    #[test]
    fn mismatch_invalidates_permanently() {
        let mut set = OverloadSet::new(&WAIT);
        assert!(!set.approve(&arg(ValueType::STR)));
        assert!(!set.approve(&arg(ValueType::INT)));
        assert_eq!(set.winner(), None);
    }

    #[test]
    fn empty_signature_is_born_completed() {
        static SIGS: [Signature; 1] = [Signature::empty()];
        let set = OverloadSet::new(&SIGS);
        assert_eq!(set.winner(), Some(0));
    }

    #[test]
    fn zero_minimum_variadic_is_born_completed() {
        static SIGS: [Signature; 1] = [Signature::variadic(ArgSpec::Ty(ValueType::BOOL), 0)];
        let mut set = OverloadSet::new(&SIGS);
        assert_eq!(set.winner(), Some(0));
        assert!(set.approve(&arg(ValueType::BOOL)));
        assert_eq!(set.winner(), Some(0));
    }

    #[test]
    fn variadic_minimum_arity_gates_completion() {
        static SIGS: [Signature; 1] = [Signature::variadic(ArgSpec::Elem(ValueKind::Int), 1)];
        let mut set = OverloadSet::new(&SIGS);
        assert_eq!(set.winner(), None);
        assert!(set.approve(&arg(ValueType::INT)));
        assert_eq!(set.winner(), Some(0));
    }

    #[test]
    fn elem_slot_accepts_scalar_and_list() {
        static SIGS: [Signature; 1] = [Signature::variadic(ArgSpec::Elem(ValueKind::Int), 1)];
        let mut set = OverloadSet::new(&SIGS);
        assert!(set.approve(&arg(ValueType::INT)));
        assert!(set.approve(&arg(ValueType::list_of(ValueKind::Int))));
        assert!(!set.approve(&arg(ValueType::list_of(ValueKind::Str))));
        assert_eq!(set.winner(), None);
    }

    #[test]
    fn fixed_signature_rejects_extra_arguments() {
        static SIGS: [Signature; 1] = [Signature::fixed(&[ArgSpec::Ty(ValueType::BOOL)])];
        let mut set = OverloadSet::new(&SIGS);
        assert!(set.approve(&arg(ValueType::BOOL)));
        assert_eq!(set.winner(), Some(0));
        assert!(!set.approve(&arg(ValueType::BOOL)));
        assert_eq!(set.winner(), None);
    }

    #[test]
    fn name_slot_matches_bare_identifiers_only() {
        static SIGS: [Signature; 1] =
            [Signature::fixed(&[ArgSpec::Name, ArgSpec::Ty(ValueType::INT)])];
        let mut set = OverloadSet::new(&SIGS);
        assert!(set.approve(&name_arg()));
        assert!(set.approve(&arg(ValueType::INT)));
        assert_eq!(set.winner(), Some(0));

        let mut set = OverloadSet::new(&SIGS);
        assert!(!set.approve(&arg(ValueType::INT)));
    }

    #[test]
    fn with_tail_completes_after_required_prefix() {
        static SIGS: [Signature; 1] = [Signature::with_tail(
            &[
                ArgSpec::Elem(ValueKind::Int),
                ArgSpec::Ty(ValueType::COMPARATOR),
            ],
            ArgSpec::Elem(ValueKind::Int),
        )];
        let mut set = OverloadSet::new(&SIGS);
        assert_eq!(set.winner(), None);
        assert!(set.approve(&arg(ValueType::INT)));
        assert!(set.approve(&arg(ValueType::COMPARATOR)));
        assert_eq!(set.winner(), Some(0));
        assert!(set.approve(&arg(ValueType::INT)));
        assert!(set.approve(&arg(ValueType::INT)));
        assert_eq!(set.winner(), Some(0));
    }

    #[test]
    fn expected_types_reports_current_slots() {
        let set = OverloadSet::new(&WAIT);
        assert_eq!(
            set.expected_types(),
            vec![ValueType::INT, ValueType::FLOAT]
        );
    }
}
