use crate::domain::model::ProgramListing;

const DEGREE: &str = "Master";
const FEES: &str = "No tuition fees";
const DURATION: &str = "4 semesters";
const LANGUAGE: &str = "English";
const INTAKE: &str = "Winter/Summer";

const fn master(title: &'static str, faculty: &'static str) -> ProgramListing {
    ProgramListing {
        title,
        degree: DEGREE,
        fees: FEES,
        faculty,
        duration: DURATION,
        language: LANGUAGE,
        intake: INTAKE,
    }
}

pub const PROGRAM_COUNT: usize = 37;

static PROGRAMS: [ProgramListing; PROGRAM_COUNT] = [
    // Computer Science & Informatics
    master("Computer Science", "Computer Science"),
    master("Cybersecurity", "Computer Science"),
    master("Data Science and Artificial Intelligence", "Computer Science"),
    master("Visual Computing", "Computer Science"),
    master("Software Engineering", "Computer Science"),
    master("Embedded Systems", "Computer Science"),
    master("Bioinformatics", "Computer Science"),
    master("Machine Learning", "Computer Science"),
    // Engineering
    master("Mechanical Engineering", "Engineering"),
    master("Materials Engineering", "Engineering"),
    master("Microsystems Engineering", "Engineering"),
    master("Systems Engineering", "Engineering"),
    master("Automation and Robotics", "Engineering"),
    // Natural Sciences
    master("Physics", "Physics"),
    master("Chemistry", "Chemistry"),
    master("Mathematics", "Mathematics"),
    master("Molecular Biology", "Life Sciences"),
    master("Microbiology", "Life Sciences"),
    // Medicine & Life Sciences
    master("Medical Informatics", "Medicine"),
    master("Biomedical Engineering", "Medicine"),
    master("Molecular Medicine", "Medicine"),
    master("Drug Research and Development", "Medicine"),
    // Language & Cultural Studies
    master("Language Science and Technology", "Language Science"),
    master("European Literature and Media", "Philosophy"),
    master("Multilingual Communication", "Language Science"),
    master("Computational Linguistics", "Language Science"),
    // Business & Economics
    master("Management", "Business Administration"),
    master("Economics", "Economics"),
    master("Information Systems", "Business Administration"),
    master("Digital Business", "Business Administration"),
    // Psychology
    master("Psychology", "Psychology"),
    master("Cognitive Science", "Psychology"),
    // Law
    master("European and International Law", "Law"),
    master("German and European Law", "Law"),
    // Education
    master("Educational Technology", "Education"),
    // Geography & Environmental Science
    master("Geography", "Geography"),
    master("Environmental Sciences", "Geography"),
];

/// The full program catalogue in its authored order.
///
/// The slice is `'static` and immutable, so it can be shared across threads
/// without synchronization. Every call returns the same slice.
pub fn programs() -> &'static [ProgramListing] {
    &PROGRAMS
}
