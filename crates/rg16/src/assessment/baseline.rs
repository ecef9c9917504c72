//! Static population baseline for the 16-type taxonomy.

use serde::Serialize;

use super::classify::JungType;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TypeBaseline {
    pub id: &'static str,
    pub label: &'static str,
    pub sample_size: u32,
    pub year: u16,
    pub source_label: &'static str,
    pub source_url: &'static str,
    pub note: &'static str,
    /// Population share per type, in taxonomy order.
    #[serde(skip)]
    shares: [f64; 16],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaselineRow {
    #[serde(rename = "type")]
    pub type_id: JungType,
    pub share: f64,
    pub rank: usize,
}

/// Where a selected type sits in the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselinePlacement {
    pub baseline_id: &'static str,
    pub label: &'static str,
    pub sample_size: u32,
    pub year: u16,
    pub source_label: &'static str,
    pub source_url: &'static str,
    pub row: BaselineRow,
    pub summary: String,
}

// Table 3 of the 2018 China (Simplified Chinese) supplement to the MBTI manual.
pub const CN_SIMPLIFIED_2018: TypeBaseline = TypeBaseline {
    id: "cn_simplified_2018",
    label: "National baseline (China, Simplified Chinese sample)",
    sample_size: 521,
    year: 2018,
    source_label: "Myers-Briggs Global Manual Supplement (China Simplified Chinese)",
    source_url: "https://www.themyersbriggs.com/-/media/Myers-Briggs/Files/Manual-Supplements/MBTIGlobalManualSuppCNS.pdf",
    note: "Type distribution of a working-age sample, not a census; use it for comparison only.",
    shares: [
        0.184, 0.04, 0.018, 0.044, 0.079, 0.058, 0.033, 0.048, 0.086, 0.029, 0.033, 0.04, 0.18,
        0.044, 0.042, 0.044,
    ],
};

pub const DEFAULT_BASELINE: TypeBaseline = CN_SIMPLIFIED_2018;

impl TypeBaseline {
    pub fn share(&self, type_id: JungType) -> f64 {
        JungType::ordered()
            .iter()
            .position(|candidate| *candidate == type_id)
            .map_or(0.0, |idx| self.shares[idx])
    }

    /// Rows ordered by share descending, then type code ascending; ranks start at 1.
    pub fn rows(&self) -> Vec<BaselineRow> {
        let mut rows: Vec<(JungType, f64)> = JungType::ordered()
            .into_iter()
            .zip(self.shares)
            .collect();
        rows.sort_by(|a, b| {
            b.1.total_cmp(&a.1)
                .then_with(|| a.0.code().cmp(b.0.code()))
        });
        rows.into_iter()
            .enumerate()
            .map(|(idx, (type_id, share))| BaselineRow {
                type_id,
                share,
                rank: idx + 1,
            })
            .collect()
    }

    pub fn placement(&self, type_id: JungType) -> Option<BaselinePlacement> {
        let row = self.rows().into_iter().find(|row| row.type_id == type_id)?;
        let summary = format!(
            "{type_id} accounts for about {:.1}% of the {} sample ({} respondents, {}), ranking {} of 16.",
            row.share * 100.0,
            self.label,
            self.sample_size,
            self.year,
            row.rank
        );
        Some(BaselinePlacement {
            baseline_id: self.id,
            label: self.label,
            sample_size: self.sample_size,
            year: self.year,
            source_label: self.source_label,
            source_url: self.source_url,
            row,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_rank_by_share_then_code() {
        let rows = DEFAULT_BASELINE.rows();
        assert_eq!(rows.len(), 16);
        assert_eq!(rows[0].type_id, JungType::Istj);
        assert_eq!(rows[1].type_id, JungType::Estj);
        assert_eq!(rows[15].type_id, JungType::Infj);
        // ENTJ, ESFJ, INTJ all hold 0.044 and sort by code.
        let tied: Vec<_> = rows
            .iter()
            .filter(|row| row.share == 0.044)
            .map(|row| (row.type_id, row.rank))
            .collect();
        assert_eq!(
            tied,
            vec![
                (JungType::Entj, 7),
                (JungType::Esfj, 8),
                (JungType::Intj, 9)
            ]
        );
    }

    #[test]
    fn shares_sum_to_roughly_one() {
        let total: f64 = DEFAULT_BASELINE.rows().iter().map(|row| row.share).sum();
        assert!((total - 1.0).abs() < 0.01, "{total}");
    }

    #[test]
    fn placement_reports_rank() {
        let placement = DEFAULT_BASELINE
            .placement(JungType::Infj)
            .expect("every type is tabled");
        assert_eq!(placement.row.rank, 16);
        assert!(placement.summary.contains("1.8%"));
    }
}
