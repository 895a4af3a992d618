//! Interface member classification.
//!
//! Kotlin requires `override` on members that implement an interface
//! member; C# does not mark them at all. The classifier answers the
//! question from the symbol graph.

use cs2kt_frontend::{MemberId, MemberKind, SemanticModel, TypeId};
use std::collections::HashSet;

pub struct MemberClassifier<'a, M: ?Sized> {
    model: &'a M,
}

impl<'a, M: SemanticModel + ?Sized> MemberClassifier<'a, M> {
    pub fn new(model: &'a M) -> Self {
        Self { model }
    }

    /// Whether `member` is the implementation its containing type resolves
    /// for some interface member of the same kind.
    ///
    /// Methods are matched against interface methods only and properties
    /// against interface properties only. Fields never implement anything.
    /// Unknown members classify as `false`.
    pub fn is_interface_implementation(&self, member: MemberId) -> bool {
        let Some(symbol) = self.model.member(member) else {
            return false;
        };
        if symbol.kind == MemberKind::Field {
            return false;
        }
        let containing = symbol.containing_type;

        let result = self.all_interfaces(containing).into_iter().any(|interface| {
            self.model
                .interface_members_of(interface)
                .into_iter()
                .filter(|candidate| {
                    self.model
                        .member(*candidate)
                        .is_some_and(|c| c.kind == symbol.kind)
                })
                .any(|candidate| self.model.implementation_of(candidate, containing) == Some(member))
        });
        tracing::trace!(%member, name = %symbol.name, result, "interface implementation check");
        result
    }

    /// [`Self::is_interface_implementation`] restricted to methods.
    pub fn is_interface_method(&self, member: MemberId) -> bool {
        self.kind_of(member) == Some(MemberKind::Method) && self.is_interface_implementation(member)
    }

    /// [`Self::is_interface_implementation`] restricted to properties.
    pub fn is_interface_property(&self, member: MemberId) -> bool {
        self.kind_of(member) == Some(MemberKind::Property)
            && self.is_interface_implementation(member)
    }

    fn kind_of(&self, member: MemberId) -> Option<MemberKind> {
        self.model.member(member).map(|m| m.kind)
    }

    /// Transitive closure of the interfaces of `ty`: those listed on the
    /// type and its base classes, and the interfaces those extend.
    pub fn all_interfaces(&self, ty: TypeId) -> Vec<TypeId> {
        let mut pending = Vec::new();
        let mut visited_types = HashSet::new();
        let mut current = Some(ty);
        while let Some(t) = current {
            if !visited_types.insert(t) {
                break;
            }
            pending.extend(self.model.interfaces_of(t));
            current = self.model.base_type_of(t);
        }

        let mut seen = HashSet::new();
        let mut interfaces = Vec::new();
        while let Some(interface) = pending.pop() {
            if seen.insert(interface) {
                interfaces.push(interface);
                pending.extend(self.model.interfaces_of(interface));
            }
        }
        interfaces
    }
}
