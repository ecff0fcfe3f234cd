use crate::application::read_models::{ComparisonReadModel, VendorRowView};
use crate::comparison::domain::PeerSavings;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the cost summary
const SUMMARY_HEADER: &str =
    "| Rank | Vendor | Total Cost | Per Device/Month | vs. Peer Average |\n";
const SUMMARY_SEPARATOR: &str = "|------|--------|------------|------------------|------------------|\n";

/// Markdown table header for the cost breakdown
const BREAKDOWN_HEADER: &str =
    "| Vendor | License | Implementation | Training | Support | Hardware | Maintenance | Operational |\n";
const BREAKDOWN_SEPARATOR: &str =
    "|--------|---------|----------------|----------|---------|----------|-------------|-------------|\n";

/// Markdown table header for the risk and ROI section
const ROI_HEADER: &str =
    "| Vendor | Annual Value | Avoided Breach Losses | Insurance Savings | ROI | Payback |\n";
const ROI_SEPARATOR: &str =
    "|--------|--------------|-----------------------|-------------------|-----|---------|\n";

/// Markdown table header for the security posture section
const POSTURE_HEADER: &str =
    "| Vendor | Security | Automation | Compliance | Overall | Insurance Tier |\n";
const POSTURE_SEPARATOR: &str =
    "|--------|----------|------------|------------|---------|----------------|\n";

/// MarkdownFormatter adapter for human-readable comparison reports
///
/// Renders the read model as a summary table, a cost-component breakdown,
/// and a risk/ROI table, with a deployment-parameters preamble.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Formats a dollar amount with thousands separators, rounded to
    /// whole dollars.
    fn format_currency(value: f64) -> String {
        let negative = value < 0.0;
        let rounded = value.abs().round() as u64;
        let digits = rounded.to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        if negative {
            format!("-${}", grouped)
        } else {
            format!("${}", grouped)
        }
    }

    fn format_roi(roi_percent: Option<f64>) -> String {
        match roi_percent {
            Some(percent) => format!("{:.1}%", percent),
            None => "n/a".to_string(),
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ComparisonReadModel) {
        output.push_str("# NAC Vendor Comparison\n\n");
        output.push_str(&format!(
            "Industry profile: **{}** (average breach cost {}, annual breach probability {:.0}%)\n\n",
            Self::escape_markdown_table_cell(&model.industry.name),
            Self::format_currency(model.industry.average_breach_cost),
            model.industry.annual_breach_probability * 100.0
        ));
        output.push_str(&format!(
            "Deployment: {} devices over {} year(s), FTE cost {}/year",
            model.deployment.devices,
            model.deployment.years,
            Self::format_currency(model.deployment.fte_annual_cost)
        ));
        if let Some(breach_cost) = model.deployment.breach_cost_override {
            output.push_str(&format!(
                ", breach cost override {}",
                Self::format_currency(breach_cost)
            ));
        }
        output.push_str("\n\n");
    }

    fn render_summary(&self, output: &mut String, rows: &[VendorRowView]) {
        output.push_str("## Cost Summary\n\n");
        output.push_str(SUMMARY_HEADER);
        output.push_str(SUMMARY_SEPARATOR);

        for row in rows {
            let savings = match row.savings_vs_peer_average {
                PeerSavings::Percent(percent) => format!("{:+.1}%", percent),
                PeerSavings::NotApplicable => "n/a".to_string(),
            };
            let name = if row.fallback_applied {
                format!("{} (fallback profile)", row.name)
            } else {
                row.name.clone()
            };

            output.push_str(&format!(
                "| {} | {} | {} | ${:.2} | {} |\n",
                row.rank,
                Self::escape_markdown_table_cell(&name),
                Self::format_currency(row.cost.total),
                row.per_device_per_month,
                savings
            ));
        }
        output.push('\n');
    }

    fn render_breakdown(&self, output: &mut String, rows: &[VendorRowView]) {
        output.push_str("## Cost Breakdown\n\n");
        output.push_str(BREAKDOWN_HEADER);
        output.push_str(BREAKDOWN_SEPARATOR);

        for row in rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&row.name),
                Self::format_currency(row.cost.license),
                Self::format_currency(row.cost.implementation),
                Self::format_currency(row.cost.training),
                Self::format_currency(row.cost.support),
                Self::format_currency(row.cost.hardware),
                Self::format_currency(row.cost.maintenance),
                Self::format_currency(row.cost.operational),
            ));
        }
        output.push('\n');
    }

    fn render_roi(&self, output: &mut String, rows: &[VendorRowView]) {
        output.push_str("## Risk & Return\n\n");
        output.push_str(ROI_HEADER);
        output.push_str(ROI_SEPARATOR);

        for row in rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&row.name),
                Self::format_currency(row.roi.annual_value),
                Self::format_currency(row.roi.avoided_breach_value),
                Self::format_currency(row.roi.insurance_savings),
                Self::format_roi(row.roi.roi_percent),
                row.roi.payback,
            ));
        }
        output.push('\n');
    }

    fn render_posture(&self, output: &mut String, rows: &[VendorRowView]) {
        output.push_str("## Security Posture\n\n");
        output.push_str(POSTURE_HEADER);
        output.push_str(POSTURE_SEPARATOR);

        for row in rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {:.1} | {} |\n",
                Self::escape_markdown_table_cell(&row.name),
                row.capability.security_maturity,
                row.capability.automation_level,
                row.capability.compliance_coverage,
                row.capability.overall_score,
                row.capability.insurance_tier,
            ));
        }
        output.push('\n');
    }

    fn render_deployment_notes(&self, output: &mut String, rows: &[VendorRowView]) {
        output.push_str("## Deployment Effort\n\n");
        for row in rows {
            output.push_str(&format!(
                "- {}: approximately {} day(s) to deploy\n",
                Self::escape_markdown_table_cell(&row.name),
                row.deployment_days
            ));
        }
        output.push('\n');
    }

    fn render_footer(&self, output: &mut String, model: &ComparisonReadModel) {
        output.push_str("---\n\n");
        output.push_str(&format!(
            "Generated by {} {} on {} ({})\n",
            model.metadata.tool_name(),
            model.metadata.tool_version(),
            model.metadata.timestamp(),
            model.metadata.serial_number()
        ));
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ComparisonReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_summary(&mut output, &model.rows);
        self.render_breakdown(&mut output, &model.rows);
        self.render_roi(&mut output, &model.rows);
        self.render_posture(&mut output, &model.rows);
        self.render_deployment_notes(&mut output, &model.rows);
        self.render_footer(&mut output, model);

        Ok(output)
    }
}
