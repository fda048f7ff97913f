//! Column schemas for the three CSV surfaces.
//!
//! Three header spellings are in circulation: the lower-case import schema,
//! the display-name export header, and the camel-case sample template. They
//! are kept distinct on purpose; unifying them would orphan files written
//! against the older headers.

/// Required import header, matched case-insensitively and order-independently.
pub const IMPORT_COLUMNS: [&str; 17] = [
    "institution",
    "tier",
    "department",
    "year",
    "offersreceived",
    "offersaccepted",
    "offersrejected",
    "highestsalary",
    "lowestsalary",
    "acceptedsalary",
    "status",
    "hackathon",
    "projectparticipation",
    "passiveincome",
    "mentalhealth",
    "extracurricular",
    "workpreference",
];

/// Export header: the import columns plus a leading system-assigned ID.
pub const EXPORT_COLUMNS: [&str; 18] = [
    "ID",
    "Institution",
    "Tier",
    "Department",
    "Year",
    "Offers Received",
    "Offers Accepted",
    "Offers Rejected",
    "Highest Salary",
    "Lowest Salary",
    "Accepted Salary",
    "Status",
    "Hackathon",
    "Project",
    "Passive Income",
    "Mental Health",
    "Extra Curricular",
    "Work Preference",
];

/// Sample-template header, camel-case field names.
pub const TEMPLATE_COLUMNS: [&str; 17] = [
    "institution",
    "tier",
    "department",
    "year",
    "offersReceived",
    "offersAccepted",
    "offersRejected",
    "highestSalary",
    "lowestSalary",
    "acceptedSalary",
    "status",
    "hackathon",
    "projectParticipation",
    "passiveIncome",
    "mentalHealth",
    "extraCurricular",
    "workPreference",
];
