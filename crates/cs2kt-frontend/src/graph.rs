//! In-memory semantic model.
//!
//! [`SymbolGraph`] is a [`SemanticModel`] built directly from declarations.
//! Embedders that already hold bound symbols (or tests) populate it through
//! the `add_*` methods; [`SymbolGraph::with_core_library`] preloads the
//! base-library types the translator knows about.

use crate::model::SemanticModel;
use crate::symbols::{MemberId, MemberKind, MemberSymbol, TypeId};
use crate::types::{DeclKind, ResolvedType, TypeSyntax};
use std::collections::{HashMap, HashSet};

/// Error raised while populating a [`SymbolGraph`].
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("type `{0}` is already declared")]
    DuplicateType(String),

    #[error("unknown {0}")]
    UnknownType(TypeId),

    #[error("unknown {0}")]
    UnknownMember(MemberId),

    #[error("{0} is not an interface")]
    NotAnInterface(TypeId),
}

#[derive(Debug, Clone)]
enum Shape {
    Primitive,
    Decl { kind: DeclKind, arity: usize },
    Enum(Vec<String>),
    Delegate(DelegateShape),
}

#[derive(Debug, Clone)]
enum DelegateShape {
    /// A declared, non-generic delegate.
    Fixed {
        params: Vec<ResolvedType>,
        ret: ResolvedType,
    },
    /// `Func<..., R>`: the last type argument is the return type.
    Func,
    /// `Action<...>`: returns `Void`.
    Action,
}

#[derive(Debug, Clone)]
struct TypeEntry {
    name: String,
    shape: Shape,
    base: Option<TypeId>,
    interfaces: Vec<TypeId>,
    members: Vec<MemberId>,
}

impl TypeEntry {
    fn instantiate(&self, args: Vec<ResolvedType>) -> Option<ResolvedType> {
        let name = self.name.clone();
        match &self.shape {
            Shape::Primitive if args.is_empty() => Some(ResolvedType::Primitive { name }),
            Shape::Decl { kind, arity } if *arity == args.len() => Some(if args.is_empty() {
                ResolvedType::Named { name, kind: *kind }
            } else {
                ResolvedType::Generic {
                    name,
                    kind: *kind,
                    args,
                }
            }),
            Shape::Enum(members) if args.is_empty() => Some(ResolvedType::Enum {
                name,
                members: members.clone(),
            }),
            Shape::Delegate(DelegateShape::Fixed { params, ret }) if args.is_empty() => {
                Some(ResolvedType::delegate(name, params.clone(), ret.clone()))
            }
            Shape::Delegate(DelegateShape::Func) => {
                let mut params = args;
                let ret = params.pop()?;
                Some(ResolvedType::delegate(name, params, ret))
            }
            Shape::Delegate(DelegateShape::Action) => Some(ResolvedType::delegate(
                name,
                args,
                ResolvedType::primitive("Void"),
            )),
            _ => None,
        }
    }

    fn is_interface(&self) -> bool {
        matches!(
            self.shape,
            Shape::Decl {
                kind: DeclKind::Interface,
                ..
            }
        )
    }
}

/// A semantic model held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct SymbolGraph {
    types: Vec<TypeEntry>,
    names: HashMap<String, TypeId>,
    members: Vec<MemberSymbol>,
    error_names: HashSet<String>,
    explicit: HashMap<(MemberId, TypeId), MemberId>,
}

impl SymbolGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph preloaded with primitives, their keyword aliases and the
    /// base-library types the translator has mappings for.
    pub fn with_core_library() -> Self {
        let mut graph = Self::new();

        let primitives: &[(&str, &[&str])] = &[
            ("Void", &["void"]),
            ("Object", &["object"]),
            ("String", &["string"]),
            ("Boolean", &["bool"]),
            ("Char", &["char"]),
            ("Byte", &["byte"]),
            ("Int16", &["short"]),
            ("Int32", &["int"]),
            ("Int64", &["long"]),
            ("Single", &["float"]),
            ("Double", &["double"]),
            ("Decimal", &["decimal"]),
        ];
        for (name, aliases) in primitives {
            graph.insert_entry(name, Shape::Primitive, aliases);
        }

        for name in ["TimeSpan", "DateTime", "Guid"] {
            graph.insert_entry(
                name,
                Shape::Decl {
                    kind: DeclKind::Struct,
                    arity: 0,
                },
                &[],
            );
        }
        for name in ["Exception", "ArgumentException", "InvalidOperationException"] {
            graph.insert_entry(
                name,
                Shape::Decl {
                    kind: DeclKind::Class,
                    arity: 0,
                },
                &[],
            );
        }

        let generics: &[(&str, DeclKind, usize)] = &[
            ("List", DeclKind::Class, 1),
            ("Set", DeclKind::Class, 1),
            ("Stack", DeclKind::Class, 1),
            ("Queue", DeclKind::Class, 1),
            ("Dictionary", DeclKind::Class, 2),
            ("ConcurrentQueue", DeclKind::Class, 1),
            ("ConcurrentDictionary", DeclKind::Class, 2),
            ("IEnumerable", DeclKind::Interface, 1),
            ("KeyValuePair", DeclKind::Struct, 2),
        ];
        for (name, kind, arity) in generics {
            graph.insert_entry(
                name,
                Shape::Decl {
                    kind: *kind,
                    arity: *arity,
                },
                &[],
            );
        }

        graph.insert_entry("Func", Shape::Delegate(DelegateShape::Func), &[]);
        graph.insert_entry("Action", Shape::Delegate(DelegateShape::Action), &[]);

        graph
    }

    fn insert_entry(&mut self, name: &str, shape: Shape, aliases: &[&str]) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(TypeEntry {
            name: name.to_string(),
            shape,
            base: None,
            interfaces: Vec::new(),
            members: Vec::new(),
        });
        self.names.insert(name.to_string(), id);
        for alias in aliases {
            self.names.insert(alias.to_string(), id);
        }
        id
    }

    fn declare(&mut self, name: &str, shape: Shape) -> Result<TypeId, GraphError> {
        if self.names.contains_key(name) {
            return Err(GraphError::DuplicateType(name.to_string()));
        }
        Ok(self.insert_entry(name, shape, &[]))
    }

    fn entry(&self, ty: TypeId) -> Option<&TypeEntry> {
        self.types.get(ty.0 as usize)
    }

    fn entry_mut(&mut self, ty: TypeId) -> Result<&mut TypeEntry, GraphError> {
        self.types
            .get_mut(ty.0 as usize)
            .ok_or(GraphError::UnknownType(ty))
    }

    /// Declare a non-generic class, struct or interface.
    pub fn add_type(&mut self, name: &str, kind: DeclKind) -> Result<TypeId, GraphError> {
        self.declare(name, Shape::Decl { kind, arity: 0 })
    }

    /// Declare a generic class, struct or interface with `arity` type parameters.
    pub fn add_generic_type(
        &mut self,
        name: &str,
        kind: DeclKind,
        arity: usize,
    ) -> Result<TypeId, GraphError> {
        self.declare(name, Shape::Decl { kind, arity })
    }

    /// Declare an enum; `members` in declaration order.
    pub fn add_enum<S: Into<String>>(
        &mut self,
        name: &str,
        members: impl IntoIterator<Item = S>,
    ) -> Result<TypeId, GraphError> {
        let members = members.into_iter().map(Into::into).collect();
        self.declare(name, Shape::Enum(members))
    }

    /// Declare a non-generic delegate by its invoke signature.
    pub fn add_delegate(
        &mut self,
        name: &str,
        params: Vec<ResolvedType>,
        ret: ResolvedType,
    ) -> Result<TypeId, GraphError> {
        self.declare(name, Shape::Delegate(DelegateShape::Fixed { params, ret }))
    }

    /// Record a name that binds to nothing because its declaration is
    /// missing (an unresolved reference). Such names resolve to no symbol
    /// and are reported as error types.
    pub fn mark_error(&mut self, name: impl Into<String>) {
        self.error_names.insert(name.into());
    }

    pub fn set_base(&mut self, ty: TypeId, base: TypeId) -> Result<(), GraphError> {
        self.entry(base).ok_or(GraphError::UnknownType(base))?;
        self.entry_mut(ty)?.base = Some(base);
        Ok(())
    }

    /// Record that `ty` lists `interface` among its bases.
    pub fn add_interface(&mut self, ty: TypeId, interface: TypeId) -> Result<(), GraphError> {
        let entry = self
            .entry(interface)
            .ok_or(GraphError::UnknownType(interface))?;
        if !entry.is_interface() {
            return Err(GraphError::NotAnInterface(interface));
        }
        self.entry_mut(ty)?.interfaces.push(interface);
        Ok(())
    }

    pub fn add_member(
        &mut self,
        ty: TypeId,
        name: &str,
        kind: MemberKind,
    ) -> Result<MemberId, GraphError> {
        let id = MemberId(self.members.len() as u32);
        self.entry_mut(ty)?.members.push(id);
        self.members.push(MemberSymbol {
            id,
            name: name.to_string(),
            kind,
            containing_type: ty,
        });
        Ok(id)
    }

    /// Record an explicit interface implementation (`void IFoo.Bar()`),
    /// which wins over name-based matching.
    pub fn add_explicit_implementation(
        &mut self,
        interface_member: MemberId,
        concrete: TypeId,
        implementation: MemberId,
    ) -> Result<(), GraphError> {
        for id in [interface_member, implementation] {
            self.member(id).ok_or(GraphError::UnknownMember(id))?;
        }
        self.entry(concrete).ok_or(GraphError::UnknownType(concrete))?;
        self.explicit
            .insert((interface_member, concrete), implementation);
        Ok(())
    }

    pub fn type_id(&self, name: &str) -> Option<TypeId> {
        self.names.get(name).copied()
    }

    pub fn type_name(&self, ty: TypeId) -> Option<&str> {
        self.entry(ty).map(|e| e.name.as_str())
    }

    /// Resolve a type argument or array element. A part that does not
    /// resolve keeps its place as `Error` or `Unknown`, so the enclosing
    /// type still resolves.
    fn resolve_part(&self, syntax: &TypeSyntax) -> ResolvedType {
        match self.resolve_type(syntax) {
            Some(ty) => ty,
            None if self.is_error_type(syntax) => ResolvedType::Error,
            None => ResolvedType::Unknown,
        }
    }

    /// Whether `ty` lists `interface` itself, directly or through the
    /// interfaces it lists. Base classes are not consulted.
    fn lists_interface(&self, ty: TypeId, interface: TypeId) -> bool {
        let listed = |t: TypeId| self.entry(t).map(|e| e.interfaces.clone()).unwrap_or_default();
        let mut pending = listed(ty);
        let mut seen = HashSet::new();
        while let Some(next) = pending.pop() {
            if next == interface {
                return true;
            }
            if seen.insert(next) {
                pending.extend(listed(next));
            }
        }
        false
    }

    /// The base chain of `ty`, starting with `ty` itself. Stops on cycles.
    fn base_chain(&self, ty: TypeId) -> Vec<TypeId> {
        let mut chain = Vec::new();
        let mut current = Some(ty);
        while let Some(t) = current {
            if chain.contains(&t) {
                break;
            }
            chain.push(t);
            current = self.entry(t).and_then(|e| e.base);
        }
        chain
    }
}

impl SemanticModel for SymbolGraph {
    fn resolve_type(&self, syntax: &TypeSyntax) -> Option<ResolvedType> {
        match syntax {
            TypeSyntax::Array(element) => Some(ResolvedType::array(self.resolve_part(element))),
            TypeSyntax::Named { name, args } => {
                let entry = self.entry(self.type_id(name)?)?;
                let args = args.iter().map(|arg| self.resolve_part(arg)).collect();
                entry.instantiate(args)
            }
        }
    }

    fn is_error_type(&self, syntax: &TypeSyntax) -> bool {
        match syntax {
            TypeSyntax::Array(element) => self.is_error_type(element),
            TypeSyntax::Named { name, args } => {
                self.error_names.contains(name) || args.iter().any(|a| self.is_error_type(a))
            }
        }
    }

    fn member(&self, id: MemberId) -> Option<&MemberSymbol> {
        self.members.get(id.0 as usize)
    }

    fn base_type_of(&self, ty: TypeId) -> Option<TypeId> {
        self.entry(ty).and_then(|e| e.base)
    }

    fn interfaces_of(&self, ty: TypeId) -> Vec<TypeId> {
        self.entry(ty)
            .map(|e| e.interfaces.clone())
            .unwrap_or_default()
    }

    fn interface_members_of(&self, interface: TypeId) -> Vec<MemberId> {
        match self.entry(interface) {
            Some(entry) if entry.is_interface() => entry.members.clone(),
            _ => Vec::new(),
        }
    }

    fn implementation_of(&self, interface_member: MemberId, concrete: TypeId) -> Option<MemberId> {
        let wanted = self.member(interface_member)?;
        let interface = wanted.containing_type;
        let chain = self.base_chain(concrete);
        // The mapping belongs to the most derived type that lists the
        // interface; members declared below it do not take part.
        let start = chain
            .iter()
            .position(|ty| *ty == interface || self.lists_interface(*ty, interface))?;
        for &ty in &chain[start..] {
            if let Some(found) = self.explicit.get(&(interface_member, ty)) {
                return Some(*found);
            }
            let entry = self.entry(ty)?;
            if entry.is_interface() {
                continue;
            }
            let implicit = entry.members.iter().copied().find(|id| {
                self.member(*id)
                    .is_some_and(|m| m.name == wanted.name && m.kind == wanted.kind)
            });
            if implicit.is_some() {
                return implicit;
            }
        }
        None
    }
}
