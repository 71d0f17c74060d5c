//! Display names for the primary subject of a diagnostic.
//!
//! The syntax tree belongs to the front end; it exposes reference nodes
//! through [`ReferenceSource`] and this module turns them into printable
//! names. Resolution never fails: a diagnostic that cannot name its subject
//! still has to be reported.

use vdiag_common::{Ident, Interner};

/// Printed when a node is not a nameable reference.
pub const UNKNOWN_SUBJECT: &str = "<unknown>";

/// The syntactic form of a reference node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ReferenceForm {
    /// `this`
    This,
    /// `super`
    Super,
    /// `this.super`
    ThisDotSuper,
    /// `super.new`
    SuperDotNew,
    /// A plain identifier.
    Identifier(Ident),
    /// Anything else (literals, calls, selects...).
    Other,
}

/// Implemented by syntax trees that can classify their reference nodes.
pub trait ReferenceSource {
    /// Node handle type of the tree.
    type Node: Copy;

    /// Returns the form of `node`.
    fn reference_form(&self, node: Self::Node) -> ReferenceForm;
}

/// Resolves reference nodes to display names using the run's interner.
#[derive(Clone, Copy)]
pub struct SubjectResolver<'a> {
    interner: &'a Interner,
}

impl<'a> SubjectResolver<'a> {
    /// Creates a resolver over `interner`.
    pub fn new(interner: &'a Interner) -> Self {
        Self { interner }
    }

    /// Returns the display name of a reference form.
    ///
    /// Every `super` form prints as `super`. An identifier the interner does
    /// not know prints as [`UNKNOWN_SUBJECT`], like any other form.
    pub fn name(&self, form: ReferenceForm) -> &'a str {
        match form {
            ReferenceForm::Super | ReferenceForm::ThisDotSuper | ReferenceForm::SuperDotNew => {
                "super"
            }
            ReferenceForm::This => "this",
            ReferenceForm::Identifier(ident) => self
                .interner
                .try_resolve(ident)
                .unwrap_or(UNKNOWN_SUBJECT),
            ReferenceForm::Other => UNKNOWN_SUBJECT,
        }
    }

    /// Returns the display name of a node.
    pub fn resolve<S: ReferenceSource>(&self, source: &S, node: S::Node) -> &'a str {
        self.name(source.reference_form(node))
    }

    /// Resolves every node of a reference chain (`a.b.super.c`).
    pub fn resolve_chain<S: ReferenceSource>(&self, source: &S, chain: &[S::Node]) -> Vec<&'a str> {
        chain.iter().map(|&node| self.resolve(source, node)).collect()
    }

    /// Resolves a chain and joins it with `.`.
    pub fn dotted<S: ReferenceSource>(&self, source: &S, chain: &[S::Node]) -> String {
        self.resolve_chain(source, chain).join(".")
    }
}
