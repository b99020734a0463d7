//! Artifact templates.
//!
//! Each artifact kind has one pure function per [`Representation`]; the
//! dispatching functions pick one from the representation they are given.

use fieldgen_schema::FieldDefinition;

use crate::{
    CodeBuilder, Representation,
    ast::{Class, ConstObject, KeyofAlias, TsEnum},
};

/// Field-name module for one record.
pub fn field_enum(identifier: &str, fields: &[FieldDefinition], repr: Representation) -> String {
    match repr {
        Representation::Nominal => field_enum_nominal(identifier, fields),
        Representation::Frozen => field_enum_frozen(identifier, fields),
    }
}

/// `export enum UserFields { id = "id", ... }`. Keys are the field names.
pub fn field_enum_nominal(identifier: &str, fields: &[FieldDefinition]) -> String {
    fields
        .iter()
        .fold(TsEnum::new(identifier), |e, field| {
            e.member(&field.name, &field.name)
        })
        .build()
}

/// `export const UserFields = { ID: "id", ... } as const;`. Keys are upper-cased.
pub fn field_enum_frozen(identifier: &str, fields: &[FieldDefinition]) -> String {
    fields
        .iter()
        .fold(ConstObject::new(identifier), |c, field| {
            c.string_entry(field.name.to_uppercase(), &field.name)
        })
        .build()
}

/// DTO or entity module for one record.
///
/// `binding` names the frozen object; `identifier` names the class.
pub fn shape(
    identifier: &str,
    binding: &str,
    fields: &[FieldDefinition],
    repr: Representation,
) -> String {
    match repr {
        Representation::Nominal => shape_nominal(identifier, fields),
        Representation::Frozen => shape_frozen(binding, fields),
    }
}

/// `export class UserDto { id!: Int; ... }`. Types are copied verbatim.
pub fn shape_nominal(identifier: &str, fields: &[FieldDefinition]) -> String {
    fields
        .iter()
        .fold(Class::new(identifier), |c, field| {
            c.field(&field.name, &field.raw_type)
        })
        .build()
}

/// `export const userDto = { id: undefined as Int, ... } as const;`
pub fn shape_frozen(binding: &str, fields: &[FieldDefinition]) -> String {
    fields
        .iter()
        .fold(ConstObject::new(binding), |c, field| {
            c.typed_slot(&field.name, &field.raw_type)
        })
        .build()
}

/// Registry of every record name.
pub fn tables(identifier: &str, binding: &str, names: &[String], repr: Representation) -> String {
    match repr {
        Representation::Nominal => tables_nominal(identifier, names),
        Representation::Frozen => tables_frozen(identifier, binding, names),
    }
}

/// `export enum Tables { USER = "User", ... }`
pub fn tables_nominal(identifier: &str, names: &[String]) -> String {
    names
        .iter()
        .fold(TsEnum::new(identifier), |e, name| {
            e.member(name.to_uppercase(), name)
        })
        .build()
}

/// Frozen registry object followed by a key type alias.
pub fn tables_frozen(identifier: &str, binding: &str, names: &[String]) -> String {
    let object = names
        .iter()
        .fold(ConstObject::new(binding), |c, name| {
            c.string_entry(name.to_uppercase(), name)
        });

    let builder = object.render(CodeBuilder::new()).blank();
    KeyofAlias::new(identifier, binding).render(builder).build()
}
