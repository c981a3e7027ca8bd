use serde::Serialize;

/// One of the six spinal measurements collected by the form, in screen
/// order. The wire names double as the source for on-screen labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PelvicIncidence,
    PelvicTilt,
    LumbarLordosisAngle,
    SacralSlope,
    PelvicRadius,
    SpondylolisthesisGrade,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::PelvicIncidence,
        Field::PelvicTilt,
        Field::LumbarLordosisAngle,
        Field::SacralSlope,
        Field::PelvicRadius,
        Field::SpondylolisthesisGrade,
    ];

    /// Key used in the request body. The prediction service owns these
    /// names; they are not translated.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::PelvicIncidence => "incidencia_pelvica",
            Field::PelvicTilt => "inclinacion_pelvica",
            Field::LumbarLordosisAngle => "angulo_lordosis_lumbar",
            Field::SacralSlope => "pendiente_sacra",
            Field::PelvicRadius => "radio_pelvico",
            Field::SpondylolisthesisGrade => "grado_espondilolistesis",
        }
    }

    /// Label derived mechanically from the wire name.
    pub fn label(self) -> String {
        self.wire_name().replace('_', " ").to_uppercase()
    }

    pub fn placeholder(self) -> String {
        format!("Enter {}", self.wire_name().replace('_', " "))
    }

    pub fn next(self) -> Field {
        Field::ALL[(self as usize + 1) % Field::ALL.len()]
    }

    pub fn prev(self) -> Field {
        Field::ALL[(self as usize + Field::ALL.len() - 1) % Field::ALL.len()]
    }
}

/// Flat request body for the prediction endpoint. Entries that fail to
/// parse as a number are carried as NaN, which serializes to `null`.
#[derive(Debug, Clone, Serialize)]
pub struct Measurements {
    pub incidencia_pelvica: f64,
    pub inclinacion_pelvica: f64,
    pub angulo_lordosis_lumbar: f64,
    pub pendiente_sacra: f64,
    pub radio_pelvico: f64,
    pub grado_espondilolistesis: f64,
}

/// Binary outcome decoded from the service's `prediccion` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Normal,
    Abnormal,
}

impl Classification {
    /// Display label. The result banner's color rule keys on these exact
    /// strings, so they stay as the service defines them.
    pub fn label(self) -> &'static str {
        match self {
            Classification::Normal => "Normal",
            Classification::Abnormal => "Anormal",
        }
    }

    pub fn message(self) -> String {
        format!("The patient's condition is {}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::{Classification, Field};

    #[test]
    fn labels_are_uppercased_wire_names() {
        assert_eq!(Field::PelvicIncidence.label(), "INCIDENCIA PELVICA");
        assert_eq!(
            Field::SpondylolisthesisGrade.label(),
            "GRADO ESPONDILOLISTESIS"
        );
    }

    #[test]
    fn focus_order_wraps_in_both_directions() {
        assert_eq!(Field::SpondylolisthesisGrade.next(), Field::PelvicIncidence);
        assert_eq!(Field::PelvicIncidence.prev(), Field::SpondylolisthesisGrade);
        let mut f = Field::PelvicIncidence;
        for _ in 0..Field::ALL.len() {
            f = f.next();
        }
        assert_eq!(f, Field::PelvicIncidence);
    }

    #[test]
    fn classification_messages_embed_the_label() {
        assert!(Classification::Normal.message().contains("Normal"));
        assert!(Classification::Abnormal.message().contains("Anormal"));
        // "Anormal" must never satisfy a case-sensitive "Normal" scan.
        assert!(!Classification::Abnormal.message().contains("Normal"));
    }
}
