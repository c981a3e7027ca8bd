use crate::domain::models::{Field, Measurements};

/// Drops every character that is not an ASCII digit or a period.
pub fn scrub(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Accepts zero or more digits, an optional single period, and at most two
/// digits after it. The empty string and a bare "." both qualify.
pub fn is_well_formed(s: &str) -> bool {
    let mut fraction_digits: Option<u32> = None;
    for c in s.chars() {
        match c {
            '.' if fraction_digits.is_none() => fraction_digits = Some(0),
            '.' => return false,
            '0'..='9' => {
                if let Some(n) = fraction_digits.as_mut() {
                    *n += 1;
                    if *n > 2 {
                        return false;
                    }
                }
            }
            _ => return false,
        }
    }
    true
}

/// Scrubs `raw` and returns it when well-formed; otherwise the edit is
/// rejected and `previous` is kept.
pub fn sanitize(previous: &str, raw: &str) -> String {
    let candidate = scrub(raw);
    if is_well_formed(&candidate) {
        candidate
    } else {
        previous.to_string()
    }
}

/// In-progress entry for every field.
///
/// All writes route through [`sanitize`], so a stored value is always a
/// well-formed partial number and the submit path can parse without
/// re-checking.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: [String; 6],
}

impl FormState {
    pub fn value(&self, field: Field) -> &str {
        &self.values[field as usize]
    }

    /// Stores the sanitized candidate for `field`. Other fields are never
    /// touched.
    pub fn apply_edit(&mut self, field: Field, raw: &str) {
        let slot = &mut self.values[field as usize];
        *slot = sanitize(slot, raw);
    }

    /// Appends one typed character, subject to the same filter.
    pub fn push_char(&mut self, field: Field, ch: char) {
        let mut candidate = self.values[field as usize].clone();
        candidate.push(ch);
        self.apply_edit(field, &candidate);
    }

    /// Drops the last character. The accepted entry language is
    /// prefix-closed, so deletion cannot break the stored-value invariant.
    pub fn delete_last(&mut self, field: Field) {
        self.values[field as usize].pop();
    }

    /// True when every field holds a non-blank entry.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| !v.trim().is_empty())
    }

    /// Parses the six entries for submission. A value the filter admits
    /// that still fails to parse (a lone ".") becomes NaN and goes out as
    /// `null` rather than aborting the request.
    pub fn to_measurements(&self) -> Measurements {
        let parse = |f: Field| self.value(f).parse::<f64>().unwrap_or(f64::NAN);
        Measurements {
            incidencia_pelvica: parse(Field::PelvicIncidence),
            inclinacion_pelvica: parse(Field::PelvicTilt),
            angulo_lordosis_lumbar: parse(Field::LumbarLordosisAngle),
            pendiente_sacra: parse(Field::SacralSlope),
            radio_pelvico: parse(Field::PelvicRadius),
            grado_espondilolistesis: parse(Field::SpondylolisthesisGrade),
        }
    }
}
