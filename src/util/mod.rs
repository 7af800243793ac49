use chrono::NaiveDate;
use uuid::Uuid;

pub(crate) fn today_local() -> NaiveDate {
    // Use system local timezone (browser runtime).
    let d = js_sys::Date::new_0();
    let y = d.get_full_year() as i32;
    let m = d.get_month() + 1;
    let day = d.get_date();
    NaiveDate::from_ymd_opt(y, m, day).unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Random v4 UUID string.
pub(crate) fn new_note_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_note_id_has_uuid_shape() {
        let id = new_note_id();
        assert_eq!(id.len(), 36);
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 5);
        assert!(parts[2].starts_with('4'));
        assert_eq!(Uuid::parse_str(&id).map(|u| u.get_version_num()), Ok(4));
    }

    #[test]
    fn test_new_note_id_is_unique() {
        let ids: HashSet<String> = (0..200).map(|_| new_note_id()).collect();
        assert_eq!(ids.len(), 200);
    }
}
