use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::CoreError;

/// Valeur d'une cellule de la grille (code d'un volet).
pub type Code = u8;

/// Nombre de lignes du panneau de référence.
pub const NUM_ROWS: usize = 6;

/// Nombre de colonnes du panneau de référence.
pub const NUM_COLS: usize = 22;

/// Codes de couleur / remplissage (jamais produits depuis du texte).
pub const SPECIAL_CODES: [Code; 9] = [63, 64, 65, 66, 67, 68, 69, 70, 71];

/// Table de référence : code → alias, le premier alias est la forme canonique.
///
/// Les trous (29–35, 43, 45, 51, 57–58, 61) sont voulus par le matériel.
pub const REFERENCE_TABLE: &[(Code, &[&str])] = &[
    (0, &[" "]),
    (1, &["A"]),
    (2, &["B"]),
    (3, &["C"]),
    (4, &["D"]),
    (5, &["E"]),
    (6, &["F"]),
    (7, &["G"]),
    (8, &["H"]),
    (9, &["I"]),
    (10, &["J"]),
    (11, &["K"]),
    (12, &["L"]),
    (13, &["M"]),
    (14, &["N"]),
    (15, &["O"]),
    (16, &["P"]),
    (17, &["Q"]),
    (18, &["R"]),
    (19, &["S"]),
    (20, &["T"]),
    (21, &["U"]),
    (22, &["V"]),
    (23, &["W"]),
    (24, &["X"]),
    (25, &["Y"]),
    (26, &["Z"]),
    (27, &["1"]),
    (28, &["2"]),
    (36, &["0"]),
    (37, &["!"]),
    (38, &["@"]),
    (39, &["#"]),
    (40, &["$"]),
    (41, &["("]),
    (42, &[")"]),
    (44, &["-"]),
    (46, &["+"]),
    (47, &["&"]),
    (48, &["="]),
    (49, &[";"]),
    (50, &[":"]),
    (52, &["'"]),
    (53, &["\""]),
    (54, &["%"]),
    (55, &[","]),
    (56, &["."]),
    (59, &["/"]),
    (60, &["?"]),
    (62, &["°"]),
    (63, &["PoppyRed", "Red", "#FF0000"]),
    (64, &["Orange"]),
    (65, &["Yellow"]),
    (66, &["Green", "#00FF00"]),
    (67, &["ParisBlue", "Blue", "#0000FF"]),
    (68, &["Violet"]),
    (69, &["White"]),
    (70, &["Black"]),
    (71, &["Filled"]),
];

static REFERENCE: LazyLock<Alphabet> = LazyLock::new(|| match Alphabet::from_table(REFERENCE_TABLE) {
    Ok(alphabet) => alphabet,
    Err(e) => panic!("table de référence invalide : {e}"),
});

/// Alphabet fermé du panneau : code → alias, plus la table inverse alias → code.
///
/// Construit une seule fois, immuable ensuite. Partageable entre threads
/// sans verrou.
///
/// # Example
/// ```
/// use sf_core::alphabet::Alphabet;
/// let alphabet = Alphabet::reference();
/// assert_eq!(alphabet.lookup_char('a'), Some(1));
/// assert_eq!(alphabet.canonical(63), Some("PoppyRed"));
/// ```
#[derive(Debug)]
pub struct Alphabet {
    forward: [Option<&'static [&'static str]>; 256],
    reverse: HashMap<&'static str, Code>,
}

impl Alphabet {
    /// Build an alphabet and its reverse map from a static table.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if a code is listed twice or has no
    /// alias, and [`CoreError::DuplicateAlias`] if one alias names two codes.
    ///
    /// # Example
    /// ```
    /// use sf_core::alphabet::Alphabet;
    /// let alphabet = Alphabet::from_table(&[(0, &[" "]), (1, &["A"])]).unwrap();
    /// assert_eq!(alphabet.len(), 2);
    /// assert!(Alphabet::from_table(&[(1, &["A"]), (2, &["A"])]).is_err());
    /// ```
    pub fn from_table(table: &'static [(Code, &'static [&'static str])]) -> Result<Self, CoreError> {
        let mut forward = [None; 256];
        let mut reverse = HashMap::new();

        for &(code, aliases) in table {
            if aliases.is_empty() {
                return Err(CoreError::Config(format!("le code {code} n'a aucun alias")));
            }
            let slot = &mut forward[usize::from(code)];
            if slot.is_some() {
                return Err(CoreError::Config(format!("le code {code} est déclaré deux fois")));
            }
            *slot = Some(aliases);

            for &alias in aliases {
                match reverse.insert(alias, code) {
                    Some(first) if first != code => {
                        return Err(CoreError::DuplicateAlias {
                            alias: alias.to_string(),
                            first,
                            second: code,
                        });
                    }
                    _ => {}
                }
            }
        }

        Ok(Self { forward, reverse })
    }

    /// The process-wide reference alphabet of the 6×22 board.
    #[must_use]
    pub fn reference() -> &'static Self {
        &REFERENCE
    }

    /// All aliases of `code`, canonical first.
    #[inline]
    #[must_use]
    pub fn aliases(&self, code: Code) -> Option<&'static [&'static str]> {
        self.forward[usize::from(code)]
    }

    /// Forme canonique (premier alias) utilisée au décodage.
    #[inline]
    #[must_use]
    pub fn canonical(&self, code: Code) -> Option<&'static str> {
        self.aliases(code).and_then(|aliases| aliases.first().copied())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, code: Code) -> bool {
        self.forward[usize::from(code)].is_some()
    }

    /// Code of a single printable character, compared in upper case.
    ///
    /// # Example
    /// ```
    /// use sf_core::alphabet::Alphabet;
    /// let alphabet = Alphabet::reference();
    /// assert_eq!(alphabet.lookup_char('Z'), Some(26));
    /// assert_eq!(alphabet.lookup_char('z'), Some(26));
    /// assert_eq!(alphabet.lookup_char('Ω'), None);
    /// ```
    #[must_use]
    pub fn lookup_char(&self, ch: char) -> Option<Code> {
        let mut buf = [0u8; 4];
        let key: &str = fold_case(ch).encode_utf8(&mut buf);
        self.reverse.get(key).copied()
    }

    /// Resolve any alias (e.g. "Red", "#00FF00", "parisblue") to its code.
    ///
    /// Exact match first, then a case-insensitive scan.
    ///
    /// # Example
    /// ```
    /// use sf_core::alphabet::Alphabet;
    /// let alphabet = Alphabet::reference();
    /// assert_eq!(alphabet.code_for("Red"), Some(63));
    /// assert_eq!(alphabet.code_for("parisblue"), Some(67));
    /// assert_eq!(alphabet.code_for("Magenta"), None);
    /// ```
    #[must_use]
    pub fn code_for(&self, alias: &str) -> Option<Code> {
        if let Some(&code) = self.reverse.get(alias) {
            return Some(code);
        }
        self.reverse
            .iter()
            .filter(|(known, _)| known.eq_ignore_ascii_case(alias))
            .map(|(_, &code)| code)
            .min()
    }

    /// Codes de couleur / remplissage (63–71).
    #[inline]
    #[must_use]
    pub fn is_special(&self, code: Code) -> bool {
        SPECIAL_CODES.contains(&code) && self.contains(code)
    }

    /// Iterate over the declared codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = Code> + '_ {
        (0..=Code::MAX).filter(|&code| self.contains(code))
    }

    /// Number of declared codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Majuscule d'un caractère quand elle tient en un seul caractère.
///
/// `ß` (→ "SS") reste tel quel et n'est donc pas reconnu.
#[inline]
#[must_use]
pub fn fold_case(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_preserves_gaps() {
        let alphabet = Alphabet::reference();
        for gap in [29, 30, 31, 32, 33, 34, 35, 43, 45, 51, 57, 58, 61] {
            assert!(!alphabet.contains(gap), "le code {gap} devrait être absent");
        }
        assert_eq!(alphabet.len(), REFERENCE_TABLE.len());
        assert_eq!(alphabet.codes().last(), Some(71));
    }

    #[test]
    fn reverse_map_inverts_every_alias() {
        let alphabet = Alphabet::reference();
        for &(code, aliases) in REFERENCE_TABLE {
            for alias in aliases {
                assert_eq!(alphabet.code_for(alias), Some(code), "alias {alias}");
            }
        }
    }

    #[test]
    fn letters_are_case_insensitive() {
        let alphabet = Alphabet::reference();
        for (lower, upper) in ('a'..='z').zip('A'..='Z') {
            assert_eq!(alphabet.lookup_char(lower), alphabet.lookup_char(upper));
            assert!(alphabet.lookup_char(upper).is_some());
        }
    }

    #[test]
    fn punctuation_and_digits() {
        let alphabet = Alphabet::reference();
        assert_eq!(alphabet.lookup_char(' '), Some(0));
        assert_eq!(alphabet.lookup_char('0'), Some(36));
        assert_eq!(alphabet.lookup_char('\''), Some(52));
        assert_eq!(alphabet.lookup_char('"'), Some(53));
        assert_eq!(alphabet.lookup_char('°'), Some(62));
        // Seuls 1 et 2 existent parmi les chiffres non nuls.
        assert_eq!(alphabet.lookup_char('3'), None);
    }

    #[test]
    fn multi_char_aliases_are_not_characters() {
        let alphabet = Alphabet::reference();
        assert_eq!(alphabet.canonical(66), Some("Green"));
        assert_eq!(alphabet.aliases(67), Some(&["ParisBlue", "Blue", "#0000FF"][..]));
        assert_eq!(alphabet.lookup_char('#'), Some(39));
    }

    #[test]
    fn special_codes() {
        let alphabet = Alphabet::reference();
        assert!(alphabet.is_special(63));
        assert!(alphabet.is_special(71));
        assert!(!alphabet.is_special(62));
        assert!(!alphabet.is_special(72));
    }

    #[test]
    fn sharp_s_does_not_fold() {
        assert_eq!(fold_case('ß'), 'ß');
        assert_eq!(fold_case('é'), 'É');
        assert!(Alphabet::reference().lookup_char('ß').is_none());
    }

    #[test]
    fn duplicate_alias_rejected() {
        let err = Alphabet::from_table(&[(1, &["A"]), (2, &["B", "A"])]).unwrap_err();
        assert_eq!(
            err,
            CoreError::DuplicateAlias {
                alias: "A".into(),
                first: 1,
                second: 2
            }
        );
    }

    #[test]
    fn repeated_alias_on_same_code_is_harmless() {
        let alphabet = Alphabet::from_table(&[(5, &["E", "E"])]).unwrap();
        assert_eq!(alphabet.lookup_char('e'), Some(5));
    }

    #[test]
    fn malformed_tables_rejected() {
        assert!(matches!(
            Alphabet::from_table(&[(1, &[])]),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            Alphabet::from_table(&[(1, &["A"]), (1, &["B"])]),
            Err(CoreError::Config(_))
        ));
    }
}
