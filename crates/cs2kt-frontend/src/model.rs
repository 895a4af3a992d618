//! The semantic model trait consumed by the translation core.

use crate::symbols::{MemberId, MemberSymbol, TypeId};
use crate::types::{ResolvedType, TypeSyntax};

/// Read-only view of a resolved program.
///
/// Adapters wrap whatever front-end produced the symbols. The core only
/// ever queries; it never mutates the model.
pub trait SemanticModel {
    /// Resolve a type reference. `None` means no symbol was found for the
    /// reference itself; type arguments and array elements that do not
    /// resolve come back as [`ResolvedType::Error`] or
    /// [`ResolvedType::Unknown`] inside the resolved type.
    fn resolve_type(&self, syntax: &TypeSyntax) -> Option<ResolvedType>;

    /// Whether the front-end reports the reference as an error type.
    fn is_error_type(&self, syntax: &TypeSyntax) -> bool;

    /// Look up a declared member.
    fn member(&self, id: MemberId) -> Option<&MemberSymbol>;

    /// The base class of a type, if any.
    fn base_type_of(&self, ty: TypeId) -> Option<TypeId>;

    /// Interfaces a type (or interface) lists directly.
    fn interfaces_of(&self, ty: TypeId) -> Vec<TypeId>;

    /// Members declared by an interface.
    fn interface_members_of(&self, interface: TypeId) -> Vec<MemberId>;

    /// The member that implements `interface_member` for `concrete`, found
    /// from the most derived type that lists the interface upward.
    fn implementation_of(&self, interface_member: MemberId, concrete: TypeId) -> Option<MemberId>;
}
