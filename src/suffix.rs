#![allow(clippy::too_many_lines)]
//! Street suffix table and lookup.
//!
//! The table maps each canonical suffix name (`STREET`) to its accepted
//! abbreviations (`ST`, `STRT`, `STR`). At build time it is flattened into a
//! single map from every spelling to its canonical name so that lookups are
//! deterministic regardless of how the entries were declared.
//!
//! Resolution policy when spellings collide:
//! - a canonical name always resolves to itself, even when another entry
//!   lists it as an abbreviation (`PARK` stays `PARK`, not `PARKS`);
//! - otherwise the first entry in table order keeps the abbreviation
//!   (`AVE` resolves to `AVENUE`, not `AVENIDA`).
//!
//! Every collision is kept in [`SuffixTable::collisions`] and logged at debug
//! level when the table is built.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, LazyLock};

use crate::error::{Error, Result};
use crate::filters;

/// The process-wide USPS table, built on first use.
static USPS: LazyLock<Arc<SuffixTable>> = LazyLock::new(|| {
    let table = SuffixTable::from_entries(USPS_SUFFIXES.iter().map(|(c, a)| (*c, a.iter())))
        .expect("valid USPS suffix table");
    Arc::new(table)
});

/// One canonical suffix with its abbreviations, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuffixEntry {
    /// Canonical suffix name, e.g. `STREET`
    pub canonical: String,
    /// Accepted abbreviations, e.g. `ST`, `STRT`, `STR`
    pub abbreviations: Vec<String>,
}

/// An abbreviation claimed by more than one canonical suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuffixCollision {
    /// The contested spelling
    pub spelling: String,
    /// Canonical suffix the spelling resolves to
    pub kept: String,
    /// Canonical suffix whose claim was dropped
    pub ignored: String,
}

/// Immutable suffix lookup table.
///
/// Safe to share between threads; it is never mutated after construction.
#[derive(Debug, Clone)]
pub struct SuffixTable {
    entries: Vec<SuffixEntry>,
    lookup: HashMap<String, String>,
    collisions: Vec<SuffixCollision>,
}

impl SuffixTable {
    /// The USPS Publication 28 table (English plus Spanish suffixes).
    pub fn usps() -> Arc<SuffixTable> {
        Arc::clone(&USPS)
    }

    /// Build a table from `(canonical, abbreviations)` pairs.
    ///
    /// Spellings are upper-cased. Table order decides which canonical name
    /// keeps a contested abbreviation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSuffixTable`] if a spelling is empty, holds
    /// anything other than ASCII letters and digits, or if a canonical name
    /// is declared twice.
    pub fn from_entries<I, S, A>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, A)>,
        S: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(canonical, abbreviations)| -> Result<SuffixEntry> {
                Ok(SuffixEntry {
                    canonical: normalize_spelling(canonical.as_ref())?,
                    abbreviations: abbreviations
                        .into_iter()
                        .map(|a| normalize_spelling(a.as_ref()))
                        .collect::<Result<Vec<_>>>()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut lookup = HashMap::new();
        for entry in &entries {
            if lookup
                .insert(entry.canonical.clone(), entry.canonical.clone())
                .is_some()
            {
                return Err(Error::invalid_suffix_table(format!(
                    "duplicate canonical name {}",
                    entry.canonical
                )));
            }
        }

        let mut collisions = Vec::new();
        for entry in &entries {
            for abbreviation in &entry.abbreviations {
                match lookup.entry(abbreviation.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(entry.canonical.clone());
                    }
                    Entry::Occupied(slot) if *slot.get() != entry.canonical => {
                        log::debug!(
                            "suffix spelling {abbreviation} claimed by {} and {}; keeping {}",
                            slot.get(),
                            entry.canonical,
                            slot.get()
                        );
                        collisions.push(SuffixCollision {
                            spelling: abbreviation.clone(),
                            kept: slot.get().clone(),
                            ignored: entry.canonical.clone(),
                        });
                    }
                    Entry::Occupied(_) => {}
                }
            }
        }

        Ok(Self {
            entries,
            lookup,
            collisions,
        })
    }

    /// Resolve a segment to its canonical suffix name.
    ///
    /// The segment is stripped to letters and digits and upper-cased first,
    /// so `"St."` resolves to `STREET`.
    pub fn lookup(&self, segment: &str) -> Option<&str> {
        let key = filters::alphanumeric(segment).to_ascii_uppercase();
        self.lookup.get(&key).map(String::as_str)
    }

    /// Check whether a segment resolves to any suffix.
    pub fn contains(&self, segment: &str) -> bool {
        self.lookup(segment).is_some()
    }

    /// Canonical names in table order.
    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.canonical.as_str())
    }

    /// Abbreviations declared for a canonical name.
    pub fn abbreviations(&self, canonical: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.canonical.eq_ignore_ascii_case(canonical))
            .map(|e| e.abbreviations.as_slice())
    }

    /// All entries in table order.
    pub fn entries(&self) -> &[SuffixEntry] {
        &self.entries
    }

    /// Spellings claimed by more than one canonical name.
    pub fn collisions(&self) -> &[SuffixCollision] {
        &self.collisions
    }

    /// Number of canonical suffixes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no suffixes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_spelling(spelling: &str) -> Result<String> {
    let upper = spelling.trim().to_ascii_uppercase();
    if upper.is_empty() {
        return Err(Error::invalid_suffix_table("empty suffix spelling"));
    }
    if filters::alphanumeric(&upper) != upper {
        return Err(Error::invalid_suffix_table(format!(
            "suffix spelling {spelling:?} must be ASCII letters and digits"
        )));
    }
    Ok(upper)
}

/// Street suffixes with their abbreviations.
///
/// Source: USPS Publication 28, appendix C1
/// (<https://pe.usps.com/text/pub28/28apc_002.htm>).
static USPS_SUFFIXES: &[(&str, &[&str])] = &[
    // English street suffixes
    ("ALLEY", &["ALY", "ALLY"]),
    ("ANEX", &["ANX", "ANNEX", "ANNX"]),
    ("ARCADE", &["ARC"]),
    ("AVENUE", &["AVE", "AVEN", "AVENU", "AVN", "AVNUE"]),
    ("BAYOU", &["BYU"]),
    ("BEACH", &["BCH"]),
    ("BEND", &["BND"]),
    ("BLUFF", &["BLF", "BLUF"]),
    ("BLUFFS", &["BLFS"]),
    ("BOTTOM", &["BTM", "BOT", "BOTTM"]),
    ("BOULEVARD", &["BLVD", "BOUL", "BOULV"]),
    ("BRANCH", &["BR", "BRNCH"]),
    ("BRIDGE", &["BRG", "BRDGE"]),
    ("BROOK", &["BRK"]),
    ("BROOKS", &["BRKS"]),
    ("BURG", &["BG"]),
    ("BURGS", &["BGS"]),
    ("BYPASS", &["BYP", "BYPA", "BYPAS", "BYPS"]),
    ("CAMP", &["CP", "CMP"]),
    ("CANYON", &["CYN", "CNYN"]),
    ("CAPE", &["CPE"]),
    ("CAUSEWAY", &["CSWY", "CAUSWA"]),
    ("CENTER", &["CTR", "CENT", "CENTR", "CENTRE", "CNTER", "CNTR"]),
    ("CENTERS", &["CTRS"]),
    ("CIRCLE", &["CIR", "CIRC", "CIRCL", "CRCL", "CRCLE"]),
    ("CIRCLES", &["CIRS"]),
    ("CLIFF", &["CLF"]),
    ("CLIFFS", &["CLFS"]),
    ("CLUB", &["CLB"]),
    ("COMMON", &["CMN"]),
    ("COMMONS", &["CMNS"]),
    ("CORNER", &["COR"]),
    ("CORNERS", &["CORS"]),
    ("COURSE", &["CRSE"]),
    ("COURT", &["CT"]),
    ("COURTS", &["CTS"]),
    ("COVE", &["CV"]),
    ("COVES", &["CVS"]),
    ("CREEK", &["CRK"]),
    ("CRESCENT", &["CRES", "CRSENT", "CRSNT"]),
    ("CREST", &["CRST"]),
    ("CROSSING", &["XING", "CRSSNG"]),
    ("CROSSROAD", &["XRD"]),
    ("CROSSROADS", &["XRDS"]),
    ("CURVE", &["CURV"]),
    ("DALE", &["DL"]),
    ("DAM", &["DM"]),
    ("DIVIDE", &["DV", "DVD", "DIV"]),
    ("DRIVE", &["DR", "DRIV", "DRV"]),
    ("DRIVES", &["DRS"]),
    ("ESTATE", &["EST"]),
    ("ESTATES", &["ESTS"]),
    ("EXPRESSWAY", &["EXPY", "EXPR", "EXPRESS", "EXPW"]),
    ("EXTENSION", &["EXT", "EXTN", "EXTNSN"]),
    ("EXTENSIONS", &["EXTS"]),
    ("FALL", &["FALL"]),
    ("FALLS", &["FLS"]),
    ("FERRY", &["FRY", "FRRY"]),
    ("FIELD", &["FLD"]),
    ("FIELDS", &["FLDS"]),
    ("FLAT", &["FLT"]),
    ("FLATS", &["FLTS"]),
    ("FORD", &["FRD"]),
    ("FORDS", &["FRDS"]),
    ("FOREST", &["FRST", "FORESTS"]),
    ("FORGE", &["FRG"]),
    ("FORGES", &["FRGS"]),
    ("FORK", &["FRK"]),
    ("FORKS", &["FRKS"]),
    ("FORT", &["FT", "FRT"]),
    ("FREEWAY", &["FWY", "FREEWY", "FRWAY", "FRWY"]),
    ("GARDEN", &["GDN", "GARDN", "GRDEN", "GRDN"]),
    ("GARDENS", &["GDNS", "GRDNS"]),
    ("GATEWAY", &["GTWY", "GATEWY", "GATWAY", "GTWAY"]),
    ("GLEN", &["GLN"]),
    ("GLENS", &["GLNS"]),
    ("GREEN", &["GRN"]),
    ("GREENS", &["GRNS"]),
    ("GROVE", &["GRV", "GROV"]),
    ("GROVES", &["GRVS"]),
    ("HARBOR", &["HBR", "HARB", "HARBR", "HRBOR"]),
    ("HARBORS", &["HBRS"]),
    ("HAVEN", &["HVN"]),
    ("HEIGHTS", &["HTS"]),
    ("HIGHWAY", &["HWY", "HIGHWY", "HIWAY", "HIWY", "HWAY"]),
    ("HILL", &["HL"]),
    ("HILLS", &["HLS"]),
    ("HOLLOW", &["HOLW", "HLLW", "HOLLOWS", "HOLWS"]),
    ("INLET", &["INLT"]),
    ("ISLAND", &["IS", "ISLND"]),
    ("ISLANDS", &["ISS", "ISLNDS"]),
    ("ISLE", &["ISLE", "ISLES"]),
    ("JUNCTION", &["JCT", "JCTION", "JCTN", "JUNCTN", "JUNCTON"]),
    ("JUNCTIONS", &["JCTS", "JCTNS"]),
    ("KEY", &["KY"]),
    ("KEYS", &["KYS"]),
    ("KNOLL", &["KNL", "KNOL"]),
    ("KNOLLS", &["KNLS"]),
    ("LAKE", &["LK"]),
    ("LAKES", &["LKS"]),
    ("LAND", &["LAND"]),
    ("LANDING", &["LNDG", "LNDNG"]),
    ("LANE", &["LN"]),
    ("LIGHT", &["LGT"]),
    ("LIGHTS", &["LGTS"]),
    ("LOAF", &["LF"]),
    ("LOCK", &["LCK"]),
    ("LOCKS", &["LCKS"]),
    ("LODGE", &["LDG", "LDGE", "LODG"]),
    ("LOOP", &["LOOP", "LOOPS"]),
    ("MALL", &["MALL"]),
    ("MANOR", &["MNR"]),
    ("MANORS", &["MNRS"]),
    ("MEADOW", &["MDW"]),
    ("MEADOWS", &["MDWS", "MEDOWS"]),
    ("MEWS", &["MEWS"]),
    ("MILL", &["ML"]),
    ("MILLS", &["MLS"]),
    ("MISSION", &["MSN", "MSSN", "MISSN"]),
    ("MOTORWAY", &["MTWY"]),
    ("MOUNT", &["MT", "MNT"]),
    ("MOUNTAIN", &["MTN", "MNTAIN", "MNTN", "MOUNTIN", "MTIN"]),
    ("MOUNTAINS", &["MTNS", "MNTNS"]),
    ("NECK", &["NCK"]),
    ("ORCHARD", &["ORCH", "ORCHRD"]),
    ("OVAL", &["OVAL", "OVL"]),
    ("OVERPASS", &["OPAS"]),
    ("PARK", &["PARK", "PRK"]),
    ("PARKS", &["PARK"]),
    ("PARKWAY", &["PKWY", "PARKWY", "PKWAY", "PKY"]),
    ("PARKWAYS", &["PKWY", "PKWYS"]),
    ("PASS", &["PASS"]),
    ("PASSAGE", &["PSGE"]),
    ("PATH", &["PATH", "PATHS"]),
    ("PIKE", &["PIKE", "PIKES"]),
    ("PINE", &["PNE"]),
    ("PINES", &["PNES"]),
    ("PLACE", &["PL"]),
    ("PLAIN", &["PLN"]),
    ("PLAINS", &["PLNS"]),
    ("PLAZA", &["PLZ", "PLZA"]),
    ("POINT", &["PT"]),
    ("POINTS", &["PTS"]),
    ("PORT", &["PRT"]),
    ("PORTS", &["PRTS"]),
    ("PRAIRIE", &["PR", "PRR"]),
    ("RADIAL", &["RADL", "RAD", "RADIEL"]),
    ("RAMP", &["RAMP"]),
    ("RANCH", &["RNCH", "RANCHES", "RNCHS"]),
    ("RAPID", &["RPD"]),
    ("RAPIDS", &["RPDS"]),
    ("REST", &["RST"]),
    ("RIDGE", &["RDG", "RDGE"]),
    ("RIDGES", &["RDGS"]),
    ("RIVER", &["RIV", "RVR", "RIVR"]),
    ("ROAD", &["RD"]),
    ("ROADS", &["RDS"]),
    ("ROUTE", &["RTE"]),
    ("ROW", &["ROW"]),
    ("RUE", &["RUE"]),
    ("RUN", &["RUN"]),
    ("SHOAL", &["SHL"]),
    ("SHOALS", &["SHLS"]),
    ("SHORE", &["SHR", "SHOAR"]),
    ("SHORES", &["SHRS", "SHOARS"]),
    ("SKYWAY", &["SKWY"]),
    ("SPRING", &["SPG", "SPNG", "SPRNG"]),
    ("SPRINGS", &["SPGS", "SPNGS", "SPRNGS"]),
    ("SPUR", &["SPUR"]),
    ("SPURS", &["SPUR"]),
    ("SQUARE", &["SQ", "SQR", "SQRE", "SQU"]),
    ("SQUARES", &["SQS", "SQRS"]),
    ("STATION", &["STA", "STATN", "STN"]),
    ("STRAVENUE", &["STRA", "STRAV", "STRAVEN", "STRAVN", "STRVN", "STRVNUE"]),
    ("STREAM", &["STRM", "STREME"]),
    ("STREET", &["ST", "STRT", "STR"]),
    ("STREETS", &["STS"]),
    ("SUMMIT", &["SMT", "SUMIT", "SUMITT"]),
    ("TERRACE", &["TER", "TERR"]),
    ("THROUGHWAY", &["TRWY"]),
    ("TRACE", &["TRCE", "TRACES"]),
    ("TRACK", &["TRAK", "TRACKS", "TRK", "TRKS"]),
    ("TRAFFICWAY", &["TRFY"]),
    ("TRAIL", &["TRL", "TRAILS", "TRLS"]),
    ("TRAILER", &["TRLR", "TRLRS"]),
    ("TUNNEL", &["TUNL", "TUNEL", "TUNLS", "TUNNELS", "TUNNL"]),
    ("TURNPIKE", &["TPKE", "TRNPK", "TURNPK"]),
    ("UNDERPASS", &["UPAS"]),
    ("UNION", &["UN"]),
    ("UNIONS", &["UNS"]),
    ("VALLEY", &["VLY", "VALLY", "VLLY"]),
    ("VALLEYS", &["VLYS"]),
    ("VIADUCT", &["VIA", "VDCT", "VIADCT"]),
    ("VIEW", &["VW"]),
    ("VIEWS", &["VWS"]),
    ("VILLAGE", &["VLG", "VILL", "VILLAG", "VILLG", "VILLIAGE"]),
    ("VILLAGES", &["VLGS"]),
    ("VILLE", &["VL"]),
    ("VISTA", &["VIS", "VIST", "VST", "VSTA"]),
    ("WALK", &["WALK"]),
    ("WALKS", &["WALK"]),
    ("WALL", &["WALL"]),
    ("WAY", &["WAY"]),
    ("WAYS", &["WAYS"]),
    ("WELL", &["WL"]),
    ("WELLS", &["WLS"]),
    // Spanish street suffixes
    ("AVENIDA", &["AVE"]),
    ("CALLE", &["CLL"]),
    ("CAMINITO", &["CMT"]),
    ("CAMINO", &["CAM"]),
    ("CERRADA", &["CER"]),
    ("CIRCULO", &["CIR"]),
    ("ENTRADA", &["ENT"]),
    ("PASEO", &["PSO"]),
    ("PLACITA", &["PLA"]),
    ("RANCHO", &["RCH"]),
    ("VEREDA", &["VER"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_usps_table_size() {
        let table = SuffixTable::usps();
        assert_eq!(table.len(), 217);
        assert!(!table.is_empty());
        assert_eq!(table.canonical_names().next(), Some("ALLEY"));
        assert_eq!(table.canonical_names().last(), Some("VEREDA"));
    }

    #[test]
    fn test_lookup_canonical_and_abbreviations() {
        let table = SuffixTable::usps();
        assert_eq!(table.lookup("STREET"), Some("STREET"));
        assert_eq!(table.lookup("St"), Some("STREET"));
        assert_eq!(table.lookup("st."), Some("STREET"));
        assert_eq!(table.lookup("RD"), Some("ROAD"));
        assert_eq!(table.lookup("Blvd,"), Some("BOULEVARD"));
        assert_eq!(table.lookup("CLL"), Some("CALLE"));
        assert_eq!(table.lookup("Avenida"), Some("AVENIDA"));
        assert_eq!(table.lookup("RANDOLPH"), None);
        assert_eq!(table.lookup("39.4"), None);
        assert_eq!(table.lookup(""), None);
        assert!(table.contains("pkwy"));
    }

    #[test]
    fn test_usps_collisions_are_resolved_deterministically() {
        let table = SuffixTable::usps();

        // Canonical names win over abbreviations.
        assert_eq!(table.lookup("PARK"), Some("PARK"));
        assert_eq!(table.lookup("SPUR"), Some("SPUR"));
        assert_eq!(table.lookup("WALK"), Some("WALK"));
        // Otherwise the earlier entry wins.
        assert_eq!(table.lookup("PKWY"), Some("PARKWAY"));
        assert_eq!(table.lookup("AVE"), Some("AVENUE"));
        assert_eq!(table.lookup("CIR"), Some("CIRCLE"));

        let mut contested: Vec<&str> = table
            .collisions()
            .iter()
            .map(|c| c.spelling.as_str())
            .collect();
        contested.sort_unstable();
        assert_eq!(contested, ["AVE", "CIR", "PARK", "PKWY", "SPUR", "WALK"]);

        let ave = table
            .collisions()
            .iter()
            .find(|c| c.spelling == "AVE")
            .expect("AVE collision");
        assert_eq!(ave.kept, "AVENUE");
        assert_eq!(ave.ignored, "AVENIDA");
    }

    #[test]
    fn test_every_uncontested_spelling_round_trips() {
        let table = SuffixTable::usps();
        for entry in table.entries() {
            assert_eq!(table.lookup(&entry.canonical), Some(entry.canonical.as_str()));
            for abbreviation in &entry.abbreviations {
                if table.collisions().iter().any(|c| &c.spelling == abbreviation) {
                    continue;
                }
                assert_eq!(
                    table.lookup(abbreviation),
                    Some(entry.canonical.as_str()),
                    "{abbreviation} should resolve to {}",
                    entry.canonical
                );
            }
        }
    }

    #[test]
    fn test_abbreviations() {
        let table = SuffixTable::usps();
        assert_eq!(
            table.abbreviations("street"),
            Some(["ST".to_string(), "STRT".to_string(), "STR".to_string()].as_slice())
        );
        assert_eq!(table.abbreviations("NOPE"), None);
    }

    #[test]
    fn test_custom_table() {
        let table =
            SuffixTable::from_entries([("lane", vec!["ln"]), ("loop", vec!["lp", "ln"])]).unwrap();
        assert_eq!(table.lookup("LN"), Some("LANE"));
        assert_eq!(table.lookup("lp"), Some("LOOP"));
        assert_eq!(table.collisions().len(), 1);
        assert_eq!(table.collisions()[0].ignored, "LOOP");
    }

    #[test]
    fn test_custom_table_errors() {
        assert_matches!(
            SuffixTable::from_entries([("LANE", vec!["LN"]), ("lane", vec![])]),
            Err(Error::InvalidSuffixTable { .. })
        );
        assert_matches!(
            SuffixTable::from_entries([("", vec!["LN"])]),
            Err(Error::InvalidSuffixTable { .. })
        );
        assert_matches!(
            SuffixTable::from_entries([("LANE", vec!["L.N"])]),
            Err(Error::InvalidSuffixTable { .. })
        );
    }
}
