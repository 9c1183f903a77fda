use serde::Serialize;

/// One English-taught program in the catalogue.
///
/// Fields are serialized in declaration order, which is also the column order
/// of the CSV and TSV exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProgramListing {
    pub title: &'static str,
    pub degree: &'static str,
    pub fees: &'static str,
    pub faculty: &'static str,
    pub duration: &'static str,
    pub language: &'static str,
    pub intake: &'static str,
}

impl ProgramListing {
    pub const FIELD_NAMES: [&'static str; 7] = [
        "title", "degree", "fees", "faculty", "duration", "language", "intake",
    ];

    /// Field name and value pairs, in column order.
    pub fn fields(&self) -> [(&'static str, &'static str); 7] {
        [
            ("title", self.title),
            ("degree", self.degree),
            ("fees", self.fees),
            ("faculty", self.faculty),
            ("duration", self.duration),
            ("language", self.language),
            ("intake", self.intake),
        ]
    }
}
