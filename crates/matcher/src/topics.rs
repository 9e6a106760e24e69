//! Keyword topics used by the fallback layer.
//!
//! Order matters: the first topic with a matching term wins.

/// A topic keyword with the synonyms that route to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub keyword: &'static str,
    pub synonyms: &'static [&'static str],
}

impl Topic {
    /// The keyword followed by its synonyms.
    pub fn terms(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.keyword).chain(self.synonyms.iter().copied())
    }
}

pub const TOPICS: &[Topic] = &[
    Topic {
        keyword: "admission",
        synonyms: &["apply", "admissions", "enroll", "entry"],
    },
    Topic {
        keyword: "courses",
        synonyms: &["course", "program", "degree", "study"],
    },
    Topic {
        keyword: "fee",
        synonyms: &["fees", "tuition", "cost", "payment"],
    },
    Topic {
        keyword: "hostel",
        synonyms: &["hostels", "accommodation", "dorm", "residence"],
    },
    Topic {
        keyword: "placement",
        synonyms: &["placements", "job", "career", "recruitment"],
    },
    Topic {
        keyword: "director",
        synonyms: &["md", "managing director", "head", "chairman"],
    },
    Topic {
        keyword: "buses",
        synonyms: &["bus", "transport", "vehicle", "daily service"],
    },
    Topic {
        keyword: "fest",
        synonyms: &["fests", "festival", "cultural", "kreya"],
    },
    Topic {
        keyword: "wifi",
        synonyms: &["internet", "network", "wireless", "connectivity"],
    },
];
