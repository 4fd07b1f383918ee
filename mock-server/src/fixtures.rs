//! Recorded reqres fixture data served by the mock.

use serde::Serialize;

pub const PER_PAGE: usize = 6;
pub const TOKEN: &str = "QpwL5tke4Pnpja7X4";

#[derive(Clone, Copy, Debug, Serialize)]
pub struct UserRecord {
    pub id: u32,
    pub email: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub avatar: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ResourceRecord {
    pub id: u32,
    pub name: &'static str,
    pub year: u32,
    pub color: &'static str,
    pub pantone_value: &'static str,
}

macro_rules! user {
    ($id:literal, $first:literal, $last:literal, $email:literal, $handle:literal) => {
        UserRecord {
            id: $id,
            email: $email,
            first_name: $first,
            last_name: $last,
            avatar: concat!("https://s3.amazonaws.com/uifaces/faces/twitter/", $handle, "/128.jpg"),
        }
    };
}

pub static USERS: [UserRecord; 12] = [
    user!(1, "George", "Bluth", "george.bluth@reqres.in", "calebogden"),
    user!(2, "Janet", "Weaver", "janet.weaver@reqres.in", "josephstein"),
    user!(3, "Emma", "Wong", "emma.wong@reqres.in", "olegpogodaev"),
    user!(4, "Eve", "Holt", "eve.holt@reqres.in", "marcoramires"),
    user!(5, "Charles", "Morris", "charles.morris@reqres.in", "stephenmoon"),
    user!(6, "Tracey", "Ramos", "tracey.ramos@reqres.in", "bigmancho"),
    user!(7, "Michael", "Lawson", "michael.lawson@reqres.in", "follettkyle"),
    user!(8, "Lindsay", "Ferguson", "lindsay.ferguson@reqres.in", "araa3185"),
    user!(9, "Tobias", "Funke", "tobias.funke@reqres.in", "vivekprvr"),
    user!(10, "Byron", "Fields", "byron.fields@reqres.in", "russoedu"),
    user!(11, "George", "Edwards", "george.edwards@reqres.in", "mrmoiree"),
    user!(12, "Rachel", "Howell", "rachel.howell@reqres.in", "hebertialmeida"),
];

pub static RESOURCES: [ResourceRecord; 12] = [
    ResourceRecord { id: 1, name: "cerulean", year: 2000, color: "#98B2D1", pantone_value: "15-4020" },
    ResourceRecord { id: 2, name: "fuchsia rose", year: 2001, color: "#C74375", pantone_value: "17-2031" },
    ResourceRecord { id: 3, name: "true red", year: 2002, color: "#BF1932", pantone_value: "19-1664" },
    ResourceRecord { id: 4, name: "aqua sky", year: 2003, color: "#7BC4C4", pantone_value: "14-4811" },
    ResourceRecord { id: 5, name: "tigerlily", year: 2004, color: "#E2583E", pantone_value: "17-1456" },
    ResourceRecord { id: 6, name: "blue turquoise", year: 2005, color: "#53B0AE", pantone_value: "15-5217" },
    ResourceRecord { id: 7, name: "sand dollar", year: 2006, color: "#DECDBE", pantone_value: "13-1106" },
    ResourceRecord { id: 8, name: "chili pepper", year: 2007, color: "#9B1B30", pantone_value: "19-1557" },
    ResourceRecord { id: 9, name: "blue iris", year: 2008, color: "#5A5B9F", pantone_value: "18-3943" },
    ResourceRecord { id: 10, name: "mimosa", year: 2009, color: "#F0C05A", pantone_value: "14-0848" },
    ResourceRecord { id: 11, name: "turquoise", year: 2010, color: "#45B5AA", pantone_value: "15-5519" },
    ResourceRecord { id: 12, name: "honeysuckle", year: 2011, color: "#D94F70", pantone_value: "18-2120" },
];

pub fn user(id: u32) -> Option<&'static UserRecord> {
    USERS.iter().find(|u| u.id == id)
}

pub fn user_by_email(email: &str) -> Option<&'static UserRecord> {
    USERS.iter().find(|u| u.email == email)
}

pub fn resource(id: u32) -> Option<&'static ResourceRecord> {
    RESOURCES.iter().find(|r| r.id == id)
}

/// Slice out a 1-based page of `PER_PAGE` records. Pages past the end are empty.
pub fn page_of<T>(records: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PER_PAGE);
    if start >= records.len() {
        return &[];
    }
    let end = (start + PER_PAGE).min(records.len());
    &records[start..end]
}

pub fn total_pages(total: usize) -> usize {
    total.div_ceil(PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn janet_is_user_two() {
        let janet = user(2).unwrap();
        assert_eq!(janet.email, "janet.weaver@reqres.in");
        assert_eq!(
            janet.avatar,
            "https://s3.amazonaws.com/uifaces/faces/twitter/josephstein/128.jpg"
        );
    }

    #[test]
    fn ids_are_sequential() {
        for (i, u) in USERS.iter().enumerate() {
            assert_eq!(u.id as usize, i + 1);
        }
        for (i, r) in RESOURCES.iter().enumerate() {
            assert_eq!(r.id as usize, i + 1);
        }
    }

    #[test]
    fn paging_splits_into_sixes() {
        assert_eq!(page_of(&USERS, 1)[0].id, 1);
        assert_eq!(page_of(&USERS, 2)[0].id, 7);
        assert_eq!(page_of(&USERS, 2).len(), 6);
        assert!(page_of(&USERS, 3).is_empty());
        assert_eq!(page_of(&USERS, 0)[0].id, 1);
        assert_eq!(total_pages(USERS.len()), 2);
    }

    #[test]
    fn unknown_lookups_are_none() {
        assert!(user(23).is_none());
        assert!(resource(23).is_none());
        assert!(user_by_email("sydney@fife").is_none());
    }
}
