use crate::analysis::pipeline::AnalysisResult;

const NOT_AVAILABLE: &str = "N/A";

/// Renders an `AnalysisResult` into the four CSV-style text blocks consumed
/// by the export UI. Widths are fixed so repeated runs diff cleanly:
/// seconds at 3 decimals, milliseconds at 1, coordinates and path lengths at
/// 4, percentages at 2. Internal math stays full precision; only the
/// renderer truncates.
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn fixations_table(result: &AnalysisResult) -> String {
        let mut out = String::from("id,start_time_s,end_time_s,duration_ms,x,y,point_count,aoi\n");
        for (fixation, aoi) in result.fixations.iter().zip(&result.fixation_aois) {
            out.push_str(&format!(
                "{},{:.3},{:.3},{:.1},{:.4},{:.4},{},{}\n",
                fixation.id,
                fixation.start_time,
                fixation.end_time,
                fixation.duration_ms,
                fixation.x,
                fixation.y,
                fixation.point_count,
                aoi
            ));
        }
        out
    }

    pub fn dwell_time_table(result: &AnalysisResult) -> String {
        let mut out = String::from(
            "aoi_id,aoi_name,total_dwell_ms,fixation_count,mean_duration_ms,percent_total\n",
        );
        for stats in &result.dwell_time {
            let id = stats
                .aoi_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            out.push_str(&format!(
                "{},{},{:.1},{},{:.1},{:.2}\n",
                id,
                stats.aoi_name,
                stats.total_dwell_ms,
                stats.fixation_count,
                stats.mean_fixation_duration_ms,
                stats.percent_of_total
            ));
        }
        out
    }

    pub fn first_fixation_table(result: &AnalysisResult) -> String {
        let mut out = String::from(
            "aoi_id,aoi_name,ttff_ms,first_duration_ms,first_x,first_y,entry_count\n",
        );
        for metrics in &result.first_fixation {
            out.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                metrics.aoi_id,
                metrics.aoi_name,
                Self::fmt_ms(metrics.time_to_first_fixation_ms),
                Self::fmt_ms(metrics.first_fixation_duration_ms),
                Self::fmt_coord(metrics.first_fixation_x),
                Self::fmt_coord(metrics.first_fixation_y),
                metrics.entry_count
            ));
        }
        out
    }

    pub fn scanpath_summary_table(result: &AnalysisResult) -> String {
        let scanpath = &result.scanpath;
        let mut out = String::from("metric,value\n");
        out.push_str(&format!("total_length,{:.4}\n", scanpath.total_length));
        out.push_str(&format!("fixation_count,{}\n", scanpath.fixation_count));
        out.push_str(&format!(
            "total_duration_ms,{:.1}\n",
            scanpath.total_duration_ms
        ));
        out.push_str(&format!(
            "mean_fixation_duration_ms,{:.1}\n",
            scanpath.mean_fixation_duration_ms
        ));
        out.push_str(&format!(
            "mean_saccade_amplitude,{:.4}\n",
            scanpath.mean_saccade_amplitude
        ));
        out.push_str(&format!(
            "aoi_sequence,{}\n",
            scanpath.aoi_sequence.join("->")
        ));
        out
    }

    fn fmt_ms(value: Option<f64>) -> String {
        value
            .map(|v| format!("{:.1}", v))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    fn fmt_coord(value: Option<f64>) -> String {
        value
            .map(|v| format!("{:.4}", v))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}
