//! Declaration macro for choice sets.
//!
//! The macro is the module-level substitute for the original
//! class-body declaration style: names are written once, in source
//! order, and the builder runs underneath.

/// Declare a choice set in place.
///
/// Expression forms return `Result<Choices, BuildError>`:
///
/// ```
/// use choiceset::choices;
///
/// // Implicit values auto-number from 0.
/// let status = choices! { Draft, Published, Archived }?;
/// assert_eq!(status.value_of("Archived")?, &choiceset::Value::Int(2));
///
/// // Explicit values are kept as given.
/// let gender = choices! { Male => "m", Female => "f", Other => "o" }?;
/// assert_eq!(gender.get("m")?.label, "male");
///
/// // Literal mode: value equals label.
/// let roles = choices!(literal: admin, user, guest)?;
/// assert_eq!(roles.get("admin")?.value, choiceset::Value::from("admin"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// The static form declares a process-wide constant table, built once on
/// first access. An invalid declaration panics there, mirroring the
/// original's import-time failure:
///
/// ```
/// choiceset::choices! {
///     static GENDER = { Male => "m", Female => "f", Other => "o" };
/// }
///
/// assert_eq!(GENDER.value_of("Male").unwrap(), &choiceset::Value::from("m"));
/// ```
///
/// Labels beyond the lowercased-name default need the builder API.
#[macro_export]
macro_rules! choices {
    () => {
        $crate::ChoicesBuilder::new().build()
    };
    ($vis:vis static $NAME:ident = { $($body:tt)* } $(;)?) => {
        $vis static $NAME: $crate::__Lazy<$crate::Choices> = $crate::__Lazy::new(|| {
            $crate::choices! { $($body)* }.expect("invalid choices declaration")
        });
    };
    ($vis:vis static $NAME:ident = literal: { $($name:ident),+ $(,)? } $(;)?) => {
        $vis static $NAME: $crate::__Lazy<$crate::Choices> = $crate::__Lazy::new(|| {
            $crate::choices!(literal: $($name),+).expect("invalid choices declaration")
        });
    };
    (literal: $($name:ident),+ $(,)?) => {
        (|| -> ::std::result::Result<$crate::Choices, $crate::BuildError> {
            let mut builder = $crate::ChoicesBuilder::literal();
            $( builder.add(stringify!($name)).done()?; )+
            builder.build()
        })()
    };
    ($($name:ident => $value:expr),+ $(,)?) => {
        (|| -> ::std::result::Result<$crate::Choices, $crate::BuildError> {
            let mut builder = $crate::ChoicesBuilder::new();
            $( builder.add(stringify!($name)).value($value).done()?; )+
            builder.build()
        })()
    };
    ($($name:ident),+ $(,)?) => {
        (|| -> ::std::result::Result<$crate::Choices, $crate::BuildError> {
            let mut builder = $crate::ChoicesBuilder::new();
            $( builder.add(stringify!($name)).done()?; )+
            builder.build()
        })()
    };
}

#[cfg(test)]
mod tests {
    use crate::Value;

    crate::choices! {
        static SUIT = { Hearts, Diamonds, Clubs, Spades };
    }

    crate::choices! {
        static ROLES = literal: { admin, user, guest };
    }

    #[test]
    fn test_empty_macro() {
        let set = crate::choices!().unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_implicit_macro() {
        let set = crate::choices! { Foo, Bar, Spam, Eggs }.unwrap();
        assert_eq!(set.value_of("Foo").unwrap(), &Value::Int(0));
        assert_eq!(set.value_of("Eggs").unwrap(), &Value::Int(3));
    }

    #[test]
    fn test_explicit_macro() {
        let gender = crate::choices! { Male => "m", Female => "f", Other => "o" }.unwrap();
        assert_eq!(gender.get("Male").unwrap().value, Value::from("m"));
        assert_eq!(gender.get("f").unwrap().label, "female");
    }

    #[test]
    fn test_literal_macro() {
        let roles = crate::choices!(literal: admin, user, guest).unwrap();
        let values: Vec<&Value> = roles.values().collect();
        assert_eq!(
            values,
            [&Value::from("admin"), &Value::from("user"), &Value::from("guest")]
        );
    }

    #[test]
    fn test_static_declaration() {
        assert_eq!(SUIT.value_of("Spades").unwrap(), &Value::Int(3));
        assert_eq!(SUIT.len(), 4);
    }

    #[test]
    fn test_static_literal_declaration() {
        assert_eq!(ROLES.get("guest").unwrap().value, Value::from("guest"));
    }
}
