//! Field type mapping for Go.

use crate::error::RenderError;
use crate::resolver::ResolvedSymbols;
use crate::target::TargetKind;
use dtoforge_model::{Primitive, TypeDef, TypeModel, TypeRef};
use std::collections::HashSet;

/// Maps model type references to Go type expressions.
pub struct TypeMapper<'a> {
    model: &'a TypeModel,
    symbols: &'a ResolvedSymbols,
}

impl<'a> TypeMapper<'a> {
    /// Creates a new type mapper.
    #[must_use]
    pub fn new(model: &'a TypeModel, symbols: &'a ResolvedSymbols) -> Self {
        Self { model, symbols }
    }

    /// Renders the Go type of field `field` in record `owner`.
    ///
    /// A record held by value that leads back to `owner` by value is
    /// rendered as a pointer, since Go rejects recursive value types.
    ///
    /// # Errors
    /// Returns `RenderError` for dangling references and for unions, which Go
    /// cannot express.
    pub fn go_type(&self, owner: &str, field: &str, type_ref: &TypeRef) -> Result<String, RenderError> {
        let rendered = self.render(owner, field, type_ref)?;
        match type_ref {
            TypeRef::Named(name) if self.embeds_by_value(name, owner) => Ok(format!("*{rendered}")),
            _ => Ok(rendered),
        }
    }

    fn render(&self, owner: &str, field: &str, type_ref: &TypeRef) -> Result<String, RenderError> {
        match type_ref {
            TypeRef::Primitive(primitive) => Ok(primitive_type(*primitive).to_string()),
            TypeRef::Named(name) => {
                if !self.model.has_type(name) {
                    return Err(RenderError::UnknownType {
                        target: TargetKind::Go,
                        owner: owner.to_string(),
                        field: field.to_string(),
                        type_name: name.clone(),
                    });
                }
                self.symbols
                    .type_name(name)
                    .map(str::to_string)
                    .ok_or_else(|| RenderError::MissingSymbol {
                        target: TargetKind::Go,
                        owner: name.clone(),
                        local: name.clone(),
                    })
            }
            TypeRef::List(inner) => Ok(format!("[]{}", self.render(owner, field, inner)?)),
            TypeRef::Nullable(inner) => {
                let rendered = self.render(owner, field, inner)?;
                // slices, `any` and pointers already have a nil value
                match inner.as_ref() {
                    TypeRef::List(_)
                    | TypeRef::Nullable(_)
                    | TypeRef::Primitive(Primitive::Mixed) => Ok(rendered),
                    _ => Ok(format!("*{rendered}")),
                }
            }
            TypeRef::Union(_) => Err(RenderError::unsupported(
                TargetKind::Go,
                owner,
                format!("field '{field}' has a union type, which Go cannot express"),
            )),
        }
    }

    /// Returns true if record `from` is `owner` or contains it through a
    /// chain of fields held by value.
    fn embeds_by_value(&self, from: &str, owner: &str) -> bool {
        let mut visited = HashSet::new();
        let mut pending = vec![from];
        while let Some(name) = pending.pop() {
            if name == owner {
                return true;
            }
            if !visited.insert(name) {
                continue;
            }
            if let Some(TypeDef::Record(record)) = self.model.get_type(name) {
                pending.extend(record.fields.iter().filter_map(|field| match &field.type_ref {
                    TypeRef::Named(next) => Some(next.as_str()),
                    _ => None,
                }));
            }
        }
        false
    }
}

/// Go spelling of a built-in scalar.
#[must_use]
pub const fn primitive_type(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::String => "string",
        Primitive::Integer => "int",
        Primitive::Float => "float64",
        Primitive::Boolean => "bool",
        Primitive::DateTime => "string",
        Primitive::Mixed => "any",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::go::GoNaming;
    use crate::resolver::IdentifierResolver;
    use dtoforge_model::{EnumDef, FieldDef, RecordDef};

    fn fixture() -> (TypeModel, ResolvedSymbols) {
        let model = TypeModel::builder()
            .enum_type(EnumDef::integer("colorEnum").case("RED", 0))
            .record(RecordDef::new("Profile"))
            .build()
            .expect("valid model");
        let symbols = IdentifierResolver::new(&model, GoNaming)
            .resolve()
            .expect("resolves");
        (model, symbols)
    }

    #[test]
    fn test_primitives() {
        let (model, symbols) = fixture();
        let mapper = TypeMapper::new(&model, &symbols);
        let render = |t: TypeRef| mapper.go_type("User", "f", &t).expect("renders");

        assert_eq!(render(TypeRef::string()), "string");
        assert_eq!(render(TypeRef::integer()), "int");
        assert_eq!(render(TypeRef::float()), "float64");
        assert_eq!(render(TypeRef::boolean()), "bool");
        assert_eq!(render(TypeRef::Primitive(Primitive::Mixed)), "any");
        assert_eq!(render(TypeRef::datetime()), "string");
        assert_eq!(render(TypeRef::nullable(TypeRef::datetime())), "*string");
    }

    #[test]
    fn test_named_uses_rendered_name() {
        let (model, symbols) = fixture();
        let mapper = TypeMapper::new(&model, &symbols);

        let rendered = mapper
            .go_type("User", "color", &TypeRef::named("colorEnum"))
            .expect("renders");
        assert_eq!(rendered, "ColorEnum");
    }

    #[test]
    fn test_containers() {
        let (model, symbols) = fixture();
        let mapper = TypeMapper::new(&model, &symbols);
        let render = |t: TypeRef| mapper.go_type("User", "f", &t).expect("renders");

        assert_eq!(render(TypeRef::list(TypeRef::list(TypeRef::integer()))), "[][]int");
        assert_eq!(render(TypeRef::nullable(TypeRef::named("Profile"))), "*Profile");
        assert_eq!(render(TypeRef::nullable(TypeRef::list(TypeRef::string()))), "[]string");
        assert_eq!(
            render(TypeRef::nullable(TypeRef::Primitive(Primitive::Mixed))),
            "any"
        );
    }

    #[test]
    fn test_union_is_unsupported() {
        let (model, symbols) = fixture();
        let mapper = TypeMapper::new(&model, &symbols);

        let err = mapper
            .go_type(
                "User",
                "age",
                &TypeRef::Union(vec![TypeRef::integer(), TypeRef::string()]),
            )
            .unwrap_err();
        assert!(matches!(err, RenderError::Unsupported { ref owner, .. } if owner == "User"));
    }

    #[test]
    fn test_self_reference_becomes_pointer() {
        let model = TypeModel::builder()
            .record(
                RecordDef::new("Node")
                    .field(FieldDef::new("next", TypeRef::named("Node")))
                    .field(FieldDef::new("children", TypeRef::list(TypeRef::named("Node"))))
                    .field(FieldDef::new("parent", TypeRef::nullable(TypeRef::named("Node")))),
            )
            .build()
            .expect("valid model");
        let symbols = IdentifierResolver::new(&model, GoNaming)
            .resolve()
            .expect("resolves");
        let mapper = TypeMapper::new(&model, &symbols);
        let render = |t: TypeRef| mapper.go_type("Node", "f", &t).expect("renders");

        assert_eq!(render(TypeRef::named("Node")), "*Node");
        assert_eq!(render(TypeRef::list(TypeRef::named("Node"))), "[]Node");
        assert_eq!(render(TypeRef::nullable(TypeRef::named("Node"))), "*Node");
    }

    #[test]
    fn test_mutual_value_cycle_uses_pointers() {
        let model = TypeModel::builder()
            .record(RecordDef::new("Order").field(FieldDef::new("customer", TypeRef::named("Customer"))))
            .record(
                RecordDef::new("Customer")
                    .field(FieldDef::new("lastOrder", TypeRef::named("Order")))
                    .field(FieldDef::new("address", TypeRef::named("Address"))),
            )
            .record(RecordDef::new("Address").field(FieldDef::new("city", TypeRef::string())))
            .build()
            .expect("valid model");
        let symbols = IdentifierResolver::new(&model, GoNaming)
            .resolve()
            .expect("resolves");
        let mapper = TypeMapper::new(&model, &symbols);

        let go_type = |owner: &str, name: &str| {
            mapper
                .go_type(owner, "f", &TypeRef::named(name))
                .expect("renders")
        };
        assert_eq!(go_type("Order", "Customer"), "*Customer");
        assert_eq!(go_type("Customer", "Order"), "*Order");
        assert_eq!(go_type("Customer", "Address"), "Address");
    }

    #[test]
    fn test_unknown_type() {
        let (model, symbols) = fixture();
        let mapper = TypeMapper::new(&model, &symbols);

        let err = mapper
            .go_type("User", "role", &TypeRef::named("Role"))
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::UnknownType { ref field, ref type_name, .. } if field == "role" && type_name == "Role"
        ));
    }
}
