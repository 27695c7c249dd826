//! Macro generating port error enums with `thiserror` messages and
//! snake-case constructors that accept anything convertible into each field.

macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $( $field : $ty, )*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreError {
            Offline { message: String } => "store offline: {message}",
            Missing { id: i64 } => "row {id} missing",
            Conflict { table: String, id: i64 } => "{table} row {id} conflicts",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(StoreError::offline("refused").to_string(), "store offline: refused");
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        assert_eq!(StoreError::missing(42_i64), StoreError::Missing { id: 42 });
    }

    #[test]
    fn mixed_fields_render_in_order() {
        let err = StoreError::conflict("books_table", 7_i64);
        assert_eq!(err.to_string(), "books_table row 7 conflicts");
    }
}
