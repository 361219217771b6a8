//! By-name field access with runtime type checks.
//!
//! Each record type registers a [`FieldSchema`]: a map from field name to the
//! field's exact value type and optional getter/setter closures. Callers can
//! then read and write fields by name through [`get_field`] and
//! [`set_field`], which validate every step and report failures as
//! [`FieldAccessError`].
//!
//! Types must match exactly. A field declared as `i64` can only be read or
//! written as `i64`, never as another integer width.
//!
//! # Examples
//!
//! ```
//! use std::sync::LazyLock;
//! use utilkit::{get_field, set_field, FieldSchema, Reflect};
//!
//! struct Account {
//!     balance: i64,
//!     owner: String,
//! }
//!
//! impl Reflect for Account {
//!     fn field_schema(&self) -> Option<&'static FieldSchema> {
//!         static SCHEMA: LazyLock<FieldSchema> = LazyLock::new(|| {
//!             FieldSchema::builder::<Account>()
//!                 .field("Balance", |a| a.balance, |a, v| a.balance = v)
//!                 .read_only("Owner", |a| a.owner.clone())
//!                 .build()
//!         });
//!         Some(&SCHEMA)
//!     }
//! }
//!
//! let mut account = Account { balance: 10, owner: "ada".to_string() };
//! set_field(Some(&mut account), "Balance", 25_i64).unwrap();
//! let balance: i64 = get_field(Some(&account), "Balance").unwrap();
//! assert_eq!(balance, 25);
//! assert!(set_field(Some(&mut account), "Owner", "bob".to_string()).is_err());
//! ```

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::error::FieldAccessError;

type Getter = Box<dyn Fn(&dyn Any) -> Option<Box<dyn Any>> + Send + Sync>;
type Setter = Box<dyn Fn(&mut dyn Any, Box<dyn Any>) -> Option<()> + Send + Sync>;

/// Upcast to [`Any`], implemented for every `'static` type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A value whose fields can be looked up by name.
pub trait Reflect: AsAny {
    /// The field map for this value, or `None` if it has no named fields.
    fn field_schema(&self) -> Option<&'static FieldSchema>;

    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

macro_rules! impl_scalar_reflect {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn field_schema(&self) -> Option<&'static FieldSchema> {
                    None
                }
            }
        )*
    };
}

impl_scalar_reflect!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

struct FieldEntry {
    value_type: TypeId,
    value_type_name: &'static str,
    getter: Option<Getter>,
    setter: Option<Setter>,
}

impl FieldEntry {
    fn check_type<V: Any>(&self, field: &str) -> Result<(), FieldAccessError> {
        if self.value_type == TypeId::of::<V>() {
            Ok(())
        } else {
            Err(FieldAccessError::type_mismatch(
                field,
                type_name::<V>(),
                self.value_type_name,
            ))
        }
    }
}

/// Named, typed accessors for one record type.
pub struct FieldSchema {
    record_name: &'static str,
    names: Vec<&'static str>,
    fields: HashMap<&'static str, FieldEntry>,
}

impl FieldSchema {
    pub fn builder<T: Any>() -> FieldSchemaBuilder<T> {
        FieldSchemaBuilder {
            schema: FieldSchema {
                record_name: type_name::<T>(),
                names: Vec::new(),
                fields: HashMap::new(),
            },
            _record: PhantomData,
        }
    }

    /// Type name of the record this schema describes
    pub fn record_name(&self) -> &'static str {
        self.record_name
    }

    /// Registered field names, in registration order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    fn entry(&self, field: &str) -> Result<&FieldEntry, FieldAccessError> {
        self.fields
            .get(field)
            .ok_or_else(|| FieldAccessError::not_found(field))
    }
}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("record_name", &self.record_name)
            .field("fields", &self.names)
            .finish()
    }
}

/// Builder for a [`FieldSchema`] of record type `T`.
pub struct FieldSchemaBuilder<T> {
    schema: FieldSchema,
    _record: PhantomData<fn(T)>,
}

impl<T: Any> FieldSchemaBuilder<T> {
    /// Registers a readable and writable field.
    pub fn field<V, G, S>(self, name: &'static str, get: G, set: S) -> Self
    where
        V: Any,
        G: Fn(&T) -> V + Send + Sync + 'static,
        S: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.insert::<V>(name, Some(erase_getter(get)), Some(erase_setter(set)))
    }

    /// Registers a field that can be read but not written.
    pub fn read_only<V, G>(self, name: &'static str, get: G) -> Self
    where
        V: Any,
        G: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.insert::<V>(name, Some(erase_getter(get)), None)
    }

    /// Registers a field that exists but is neither readable nor writable.
    pub fn private<V: Any>(self, name: &'static str) -> Self {
        self.insert::<V>(name, None, None)
    }

    pub fn build(self) -> FieldSchema {
        self.schema
    }

    fn insert<V: Any>(
        mut self,
        name: &'static str,
        getter: Option<Getter>,
        setter: Option<Setter>,
    ) -> Self {
        let entry = FieldEntry {
            value_type: TypeId::of::<V>(),
            value_type_name: type_name::<V>(),
            getter,
            setter,
        };
        if self.schema.fields.insert(name, entry).is_none() {
            self.schema.names.push(name);
        }
        self
    }
}

fn erase_getter<T, V, G>(get: G) -> Getter
where
    T: Any,
    V: Any,
    G: Fn(&T) -> V + Send + Sync + 'static,
{
    Box::new(move |record: &dyn Any| {
        record
            .downcast_ref::<T>()
            .map(|record| Box::new(get(record)) as Box<dyn Any>)
    })
}

fn erase_setter<T, V, S>(set: S) -> Setter
where
    T: Any,
    V: Any,
    S: Fn(&mut T, V) + Send + Sync + 'static,
{
    Box::new(move |record: &mut dyn Any, value: Box<dyn Any>| {
        let record = record.downcast_mut::<T>()?;
        let value = value.downcast::<V>().ok()?;
        set(record, *value);
        Some(())
    })
}

/// Reads the field `field` of `target` as a `V`.
///
/// # Errors
///
/// Fails, in this order of checks, when `target` is `None`, has no named
/// fields, has no such field, does not expose the field for reading, or
/// declares the field with a type other than `V`.
pub fn get_field<V, R>(target: Option<&R>, field: &str) -> Result<V, FieldAccessError>
where
    V: Any,
    R: Reflect + ?Sized,
{
    let target = target.ok_or(FieldAccessError::NullReference)?;
    let schema = schema_of(target)?;
    let entry = schema.entry(field)?;
    let getter = entry
        .getter
        .as_ref()
        .ok_or_else(|| FieldAccessError::NotReadable {
            field: field.to_string(),
        })?;
    entry.check_type::<V>(field)?;

    getter(target.as_any())
        .and_then(|value| value.downcast::<V>().ok())
        .map(|value| *value)
        .ok_or_else(|| {
            FieldAccessError::type_mismatch(field, type_name::<V>(), entry.value_type_name)
        })
}

/// Overwrites the field `field` of `target` with `value`.
///
/// # Errors
///
/// Fails, in this order of checks, when `target` is `None`, has no named
/// fields, has no such field, does not expose the field for writing, or
/// declares the field with a type other than `V`. `target` is unchanged on
/// failure.
pub fn set_field<V, R>(
    target: Option<&mut R>,
    field: &str,
    value: V,
) -> Result<(), FieldAccessError>
where
    V: Any,
    R: Reflect + ?Sized,
{
    let target = target.ok_or(FieldAccessError::NullReference)?;
    let schema = schema_of(&*target)?;
    let entry = schema.entry(field)?;
    let setter = entry
        .setter
        .as_ref()
        .ok_or_else(|| FieldAccessError::NotWritable {
            field: field.to_string(),
        })?;
    entry.check_type::<V>(field)?;

    setter(target.as_any_mut(), Box::new(value)).ok_or_else(|| {
        FieldAccessError::type_mismatch(field, type_name::<V>(), entry.value_type_name)
    })
}

fn schema_of<R: Reflect + ?Sized>(target: &R) -> Result<&'static FieldSchema, FieldAccessError> {
    target
        .field_schema()
        .ok_or_else(|| FieldAccessError::NotAStruct {
            type_name: target.type_name(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    #[derive(Debug, Clone, PartialEq)]
    struct Character {
        level: i64,
        name: String,
        tags: Vec<String>,
        secret: u8,
    }

    impl Reflect for Character {
        fn field_schema(&self) -> Option<&'static FieldSchema> {
            static SCHEMA: LazyLock<FieldSchema> = LazyLock::new(|| {
                FieldSchema::builder::<Character>()
                    .field("Level", |c| c.level, |c, v| c.level = v)
                    .field("Tags", |c| c.tags.clone(), |c, v| c.tags = v)
                    .read_only("Name", |c| c.name.clone())
                    .private::<u8>("secret")
                    .build()
            });
            Some(&SCHEMA)
        }
    }

    fn hero() -> Character {
        Character {
            level: 1,
            name: "Aria".to_string(),
            tags: vec!["ranger".to_string()],
            secret: 7,
        }
    }

    #[test]
    fn test_get_field() {
        let character = hero();
        let level: i64 = get_field(Some(&character), "Level").unwrap();
        assert_eq!(level, 1);
        let name: String = get_field(Some(&character), "Name").unwrap();
        assert_eq!(name, "Aria");
    }

    #[test]
    fn test_get_field_through_trait_object() {
        let character = hero();
        let target: &dyn Reflect = &character;
        let tags: Vec<String> = get_field(Some(target), "Tags").unwrap();
        assert_eq!(tags, vec!["ranger".to_string()]);
    }

    #[test]
    fn test_set_field() {
        let mut character = hero();
        set_field(Some(&mut character), "Level", 12_i64).unwrap();
        assert_eq!(character.level, 12);

        set_field(Some(&mut character), "Tags", Vec::<String>::new()).unwrap();
        assert!(character.tags.is_empty());
    }

    #[test]
    fn test_get_field_null_reference() {
        let err = get_field::<i64, Character>(None, "Level").unwrap_err();
        assert_eq!(err, FieldAccessError::NullReference);
    }

    #[test]
    fn test_set_field_null_reference() {
        let err = set_field::<i64, Character>(None, "Level", 3).unwrap_err();
        assert_eq!(err, FieldAccessError::NullReference);
    }

    #[test]
    fn test_get_field_not_a_struct() {
        let number = 5_i64;
        let err = get_field::<i64, _>(Some(&number), "Level").unwrap_err();
        assert_eq!(err, FieldAccessError::NotAStruct { type_name: "i64" });
    }

    #[test]
    fn test_set_field_not_a_struct() {
        let mut text = String::from("hello");
        let err = set_field(Some(&mut text), "len", 3_usize).unwrap_err();
        assert!(matches!(err, FieldAccessError::NotAStruct { .. }));
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_get_field_unknown_name() {
        let character = hero();
        let err = get_field::<i64, _>(Some(&character), "Mana").unwrap_err();
        assert_eq!(err, FieldAccessError::not_found("Mana"));
        assert_eq!(err.to_string(), "field Mana not found");
    }

    #[test]
    fn test_field_names_are_case_sensitive() {
        let character = hero();
        let err = get_field::<i64, _>(Some(&character), "level").unwrap_err();
        assert!(matches!(err, FieldAccessError::FieldNotFound { .. }));
    }

    #[test]
    fn test_get_field_type_mismatch() {
        let character = hero();
        let err = get_field::<i32, _>(Some(&character), "Level").unwrap_err();
        assert_eq!(err, FieldAccessError::type_mismatch("Level", "i32", "i64"));
    }

    #[test]
    fn test_set_field_type_mismatch_leaves_record_unchanged() {
        let mut character = hero();
        let err = set_field(Some(&mut character), "Level", 2_u64).unwrap_err();
        assert!(matches!(err, FieldAccessError::TypeMismatch { .. }));
        assert_eq!(character, hero());
    }

    #[test]
    fn test_set_field_read_only() {
        let mut character = hero();
        let err = set_field(Some(&mut character), "Name", "Bram".to_string()).unwrap_err();
        assert_eq!(
            err,
            FieldAccessError::NotWritable {
                field: "Name".to_string()
            }
        );
        assert_eq!(character.name, "Aria");
    }

    #[test]
    fn test_private_field_is_neither_readable_nor_writable() {
        let mut character = hero();
        let read = get_field::<u8, _>(Some(&character), "secret").unwrap_err();
        assert!(matches!(read, FieldAccessError::NotReadable { .. }));

        let write = set_field(Some(&mut character), "secret", 9_u8).unwrap_err();
        assert!(matches!(write, FieldAccessError::NotWritable { .. }));
        assert_eq!(character.secret, 7);
    }

    #[test]
    fn test_schema_metadata() {
        let schema = hero().field_schema().unwrap();
        assert!(schema.record_name().ends_with("Character"));
        assert_eq!(
            schema.field_names().collect::<Vec<_>>(),
            vec!["Level", "Tags", "Name", "secret"]
        );
        assert!(schema.contains("Name"));
        assert!(!schema.contains("Mana"));
    }
}
