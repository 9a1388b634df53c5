//! Accessor generators shared by the model objects.
//!
//! Each macro expands inside an `impl` block to an accessor, a plain setter
//! and a chainable `with_*` setter for one field. Sequence and map fields
//! additionally get an `add_*` method that creates the collection on first
//! use.

macro_rules! required_string {
    ($(#[$meta:meta])* $field:ident, $setter:ident, $fluent:ident) => {
        $(#[$meta])*
        pub fn $field(&self) -> &str {
            &self.$field
        }

        pub fn $setter(&mut self, $field: impl Into<String>) {
            self.$field = $field.into();
        }

        pub fn $fluent(&mut self, $field: impl Into<String>) -> &mut Self {
            self.$setter($field);
            self
        }
    };
}

macro_rules! required_value {
    ($(#[$meta:meta])* $field:ident, $field_mut:ident, $setter:ident, $fluent:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> &$ty {
            &self.$field
        }

        pub fn $field_mut(&mut self) -> &mut $ty {
            &mut self.$field
        }

        pub fn $setter(&mut self, $field: $ty) {
            self.$field = $field;
        }

        pub fn $fluent(&mut self, $field: $ty) -> &mut Self {
            self.$setter($field);
            self
        }
    };
}

macro_rules! optional_string {
    ($(#[$meta:meta])* $field:ident, $setter:ident, $fluent:ident) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }

        pub fn $setter(&mut self, $field: Option<String>) {
            self.$field = $field;
        }

        pub fn $fluent(&mut self, $field: impl Into<String>) -> &mut Self {
            self.$setter(Some($field.into()));
            self
        }
    };
}

macro_rules! optional_copy {
    ($(#[$meta:meta])* $field:ident, $setter:ident, $fluent:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }

        pub fn $setter(&mut self, $field: Option<$ty>) {
            self.$field = $field;
        }

        pub fn $fluent(&mut self, $field: $ty) -> &mut Self {
            self.$setter(Some($field));
            self
        }
    };
}

macro_rules! optional_value {
    ($(#[$meta:meta])* $field:ident, $field_mut:ident, $setter:ident, $fluent:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }

        pub fn $field_mut(&mut self) -> Option<&mut $ty> {
            self.$field.as_mut()
        }

        pub fn $setter(&mut self, $field: Option<$ty>) {
            self.$field = $field;
        }

        pub fn $fluent(&mut self, $field: $ty) -> &mut Self {
            self.$setter(Some($field));
            self
        }
    };
}

macro_rules! optional_boxed {
    ($(#[$meta:meta])* $field:ident, $setter:ident, $fluent:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_deref()
        }

        pub fn $setter(&mut self, $field: Option<$ty>) {
            self.$field = $field.map(Box::new);
        }

        pub fn $fluent(&mut self, $field: $ty) -> &mut Self {
            self.$setter(Some($field));
            self
        }
    };
}

macro_rules! optional_list {
    ($(#[$meta:meta])* $field:ident, $setter:ident, $fluent:ident, $adder:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&[$ty]> {
            self.$field.as_deref()
        }

        pub fn $setter(&mut self, $field: Option<Vec<$ty>>) {
            self.$field = $field;
        }

        pub fn $fluent(&mut self, $field: Vec<$ty>) -> &mut Self {
            self.$setter(Some($field));
            self
        }

        pub fn $adder(&mut self, item: impl Into<$ty>) -> &mut Self {
            self.$field.get_or_insert_with(Vec::new).push(item.into());
            self
        }
    };
}

macro_rules! optional_map {
    ($(#[$meta:meta])* $field:ident, $setter:ident, $fluent:ident, $adder:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&indexmap::IndexMap<String, $ty>> {
            self.$field.as_ref()
        }

        pub fn $setter(&mut self, $field: Option<indexmap::IndexMap<String, $ty>>) {
            self.$field = $field;
        }

        pub fn $fluent(&mut self, $field: indexmap::IndexMap<String, $ty>) -> &mut Self {
            self.$setter(Some($field));
            self
        }

        pub fn $adder(&mut self, key: impl Into<String>, value: impl Into<$ty>) -> &mut Self {
            self.$field
                .get_or_insert_with(indexmap::IndexMap::new)
                .insert(key.into(), value.into());
            self
        }
    };
}

pub(crate) use optional_boxed;
pub(crate) use optional_copy;
pub(crate) use optional_list;
pub(crate) use optional_map;
pub(crate) use optional_string;
pub(crate) use optional_value;
pub(crate) use required_string;
pub(crate) use required_value;
