//! Application constants for the MoMA collection converter
//!
//! This module contains the column layout of the collection CSV, the
//! sentinel values used to classify rows, and the vocabulary used when
//! writing Turtle output.

// =============================================================================
// Input Layout
// =============================================================================

/// Number of columns in every collection record
pub const COLUMN_COUNT: usize = 14;

/// Column positions within a collection record
pub mod columns {
    pub const TITLE: usize = 0;
    pub const ARTIST: usize = 1;
    pub const ARTIST_BIO: usize = 2;
    pub const DATE: usize = 3;
    pub const MEDIUM: usize = 4;
    pub const DIMENSIONS: usize = 5;
    pub const CREDIT_LINE: usize = 6;
    pub const MOMA_NUMBER: usize = 7;
    pub const CLASSIFICATION: usize = 8;
    pub const DEPARTMENT: usize = 9;
    pub const DATE_ACQUIRED: usize = 10;
    pub const CURATOR_APPROVED: usize = 11;
    pub const OBJECT_ID: usize = 12;
    pub const URL: usize = 13;
}

/// Header names in column order, as published in Artworks.csv
pub const COLUMN_NAMES: [&str; 14] = [
    "Title",
    "Artist",
    "ArtistBio",
    "Date",
    "Medium",
    "Dimensions",
    "CreditLine",
    "MoMANumber",
    "Classification",
    "Department",
    "DateAcquired",
    "CuratorApproved",
    "ObjectID",
    "URL",
];

/// Value of the MoMANumber column on the header row
pub const HEADER_SENTINEL: &str = "MoMANumber";

/// CuratorApproved values
pub const CURATOR_APPROVED_YES: &str = "Y";
pub const CURATOR_APPROVED_NO: &str = "N";

// =============================================================================
// Output Vocabulary
// =============================================================================

/// Default base for per-artwork subject URIs; the object id is appended
pub const DEFAULT_SUBJECT_BASE: &str = "http://learningsparql.com/ns/moma/artwork/";

/// Namespace prefixes declared at the top of every output document
pub mod namespaces {
    pub const MOMA_PREFIX: &str = "m";
    pub const MOMA: &str = "http://learningsparql.com/ns/moma#";

    pub const DCTERMS_PREFIX: &str = "dcterms";
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";

    pub const SCHEMA_PREFIX: &str = "schema";
    pub const SCHEMA: &str = "http://schema.org/";

    pub const XSD_PREFIX: &str = "xsd";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// All default prefixes in declaration order
    pub const DEFAULTS: &[(&str, &str)] = &[
        (MOMA_PREFIX, MOMA),
        (DCTERMS_PREFIX, DCTERMS),
        (SCHEMA_PREFIX, SCHEMA),
        (XSD_PREFIX, XSD),
    ];
}

/// Predicates used for each emitted fact, as prefixed names
pub mod predicates {
    // Original fields
    pub const EXTENT: &str = "dcterms:extent";
    pub const TITLE: &str = "dcterms:title";
    pub const ARTIST: &str = "m:artist";
    pub const ARTIST_BIO: &str = "m:artistBio";
    pub const DATE: &str = "m:date";
    pub const MEDIUM: &str = "dcterms:medium";
    pub const DIMENSIONS: &str = "m:dimensions";
    pub const CREDIT_LINE: &str = "m:creditLine";
    pub const MOMA_NUMBER: &str = "m:momaNumber";
    pub const CLASSIFICATION: &str = "m:classification";
    pub const DEPARTMENT: &str = "m:department";
    pub const DATE_ACQUIRED: &str = "m:dateAcquired";
    pub const CURATOR_APPROVED: &str = "m:curatorApproved";
    pub const OBJECT_ID: &str = "m:objectID";
    pub const URL: &str = "schema:url";

    // Derived fields
    pub const WIDTH_CM: &str = "m:widthCm";
    pub const HEIGHT_CM: &str = "m:heightCm";
    pub const DEPTH_CM: &str = "m:depthCm";
    pub const DIMENSIONS_NOTE: &str = "m:dimensionsNote";
    pub const BIRTH_COUNTRY: &str = "m:birthCountry";
    pub const CITIZENSHIP_COUNTRY: &str = "m:citizenshipCountry";
    pub const BIRTH_YEAR: &str = "m:birthYear";
    pub const DEATH_YEAR: &str = "m:deathYear";
    pub const WORK_START_DATE: &str = "m:workStartDate";
    pub const WORK_FINISH_DATE: &str = "m:workFinishDate";
}

/// Datatype applied to date literals
pub const DATE_DATATYPE: &str = "xsd:date";

/// Indentation before each predicate line in a subject block
pub const FACT_INDENT: &str = "     ";

/// Provenance comment lines written after the prefix declarations
pub const PROVENANCE_LINES: &[&str] = &[
    "Converted from the Museum of Modern Art collection metadata (Artworks.csv).",
    "Source repository: https://github.com/MuseumofModernArt/collection",
    "The Museum of Modern Art has placed this data in the public domain",
    "under the Creative Commons CC0 License:",
    "https://creativecommons.org/publicdomain/zero/1.0/",
];
