//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier assigned on insert.
        id -> Uuid,
        /// Title with directives removed.
        #[max_length = 1000]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Optional calendar deadline.
        deadline -> Nullable<Date>,
        /// Task status.
        #[max_length = 20]
        status -> Varchar,
        /// Task priority.
        #[max_length = 20]
        priority -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
