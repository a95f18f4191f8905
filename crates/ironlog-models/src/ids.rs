//! Typed ID wrappers.
//!
//! Each entity gets its own `Uuid` newtype so a `WorkoutId` cannot be
//! passed where an `ExerciseId` is expected. The wrappers encode and
//! decode as plain Postgres `uuid` values and as JSON strings.

use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Type,
    postgres::{PgHasArrayType, PgTypeInfo},
};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        #[serde(transparent)]
        #[schema(value_type = String, format = "uuid")]
        pub struct $name(pub Uuid);

        impl $name {
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            #[inline]
            fn from(id: $name) -> Uuid {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl Type<sqlx::Postgres> for $name {
            fn type_info() -> PgTypeInfo {
                <Uuid as Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <Uuid as Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'q> Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <Uuid as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }

        impl<'r> Decode<'r, sqlx::Postgres> for $name {
            fn decode(
                value: <sqlx::Postgres as Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <Uuid as Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
            }
        }

        impl PgHasArrayType for $name {
            fn array_type_info() -> PgTypeInfo {
                <Uuid as PgHasArrayType>::array_type_info()
            }
        }
    };
}

define_id!(
    /// Identifier of an account.
    UserId
);

define_id!(
    /// Identifier of an exercise category.
    CategoryId
);

define_id!(
    /// Identifier of a catalog exercise.
    ExerciseId
);

define_id!(
    /// Identifier of a logged workout.
    WorkoutId
);

define_id!(
    /// Identifier of one exercise row inside a workout.
    WorkoutExerciseId
);

define_id!(
    /// Identifier of a progress entry.
    ProgressLogId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_uuid_strings() {
        let uuid = Uuid::new_v4();
        let id = ExerciseId::from(uuid);
        assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(uuid.to_string()));

        let parsed: ExerciseId = serde_json::from_str(&format!("\"{}\"", uuid)).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_invalid_uuid_is_rejected() {
        assert!(serde_json::from_str::<WorkoutId>("\"not-a-uuid\"").is_err());
        assert!("nope".parse::<UserId>().is_err());
    }

    #[test]
    fn test_debug_names_the_entity() {
        let id = WorkoutId::from(Uuid::nil());
        assert_eq!(
            format!("{:?}", id),
            "WorkoutId(00000000-0000-0000-0000-000000000000)"
        );
        assert_eq!(Uuid::from(id), Uuid::nil());
    }
}
