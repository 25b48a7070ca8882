/// Subject ids are typed by admins and matched by string equality in the
/// store, so they get normalized once on the way in.
pub fn normalize_subject_id(raw: &str) -> String {
    raw.trim().to_lowercase()
}
