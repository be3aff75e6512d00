use crate::api::ClassifiedSeries;
use crate::rename::{RenameOutcome, RenameSummary};
use std::fmt;

/// Text report for one classified instance
pub struct TextReport<'a> {
    series: &'a ClassifiedSeries,
}

impl<'a> TextReport<'a> {
    pub fn new(series: &'a ClassifiedSeries) -> Self {
        Self { series }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attributes = &self.series.attributes;
        let category = self.series.result.category;

        writeln!(f, "MR Series Classification")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Category:       {}", category)?;
        writeln!(f, "Series Name:    {}", self.series.name().unwrap_or("none"))?;
        writeln!(f, "Family:         {}", category.family())?;
        writeln!(f, "Orientation:    {}", self.series.orientation)?;
        writeln!(f)?;
        writeln!(f, "Attributes")?;
        writeln!(f, "----------")?;
        writeln!(f, "Modality:       {}", attributes.modality)?;
        writeln!(f, "Description:    {}", attributes.series_description)?;
        writeln!(f, "Acquisition:    {}", attributes.acquisition_type)?;
        writeln!(f, "Contrast:       {}", attributes.contrast)?;
        writeln!(f, "Image Type:     {}", attributes.image_type)?;
        if let Some(tr) = attributes.repetition_time {
            writeln!(f, "TR (ms):        {}", tr)?;
        }
        if let Some(b) = attributes.b_value {
            writeln!(f, "b-value:        {}", b)?;
        }
        if let Some(directions) = attributes.diffusion_directions {
            writeln!(f, "Directions:     {}", directions)?;
        }

        Ok(())
    }
}

/// Text report for a rename run
pub struct RenameReport<'a> {
    summary: &'a RenameSummary,
}

impl<'a> RenameReport<'a> {
    pub fn new(summary: &'a RenameSummary) -> Self {
        Self { summary }
    }
}

impl<'a> fmt::Display for RenameReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;

        writeln!(f, "Rename Summary")?;
        writeln!(f, "==============")?;
        writeln!(f)?;
        writeln!(f, "Files:          {}", summary.total())?;
        writeln!(f, "Copied:         {}", summary.copied())?;
        writeln!(f, "Already there:  {}", summary.already_present())?;
        if summary.planned() > 0 {
            writeln!(f, "Planned:        {}", summary.planned())?;
        }
        writeln!(f, "Unmatched:      {}", summary.unmatched())?;
        writeln!(f, "Failed:         {}", summary.failed())?;

        let tally = summary.by_series();
        if !tally.is_empty() {
            writeln!(f)?;
            writeln!(f, "Series")?;
            writeln!(f, "------")?;
            for (series, count) in &tally {
                writeln!(f, "{:<24}{}", series, count)?;
            }
        }

        let planned: Vec<_> = summary
            .outcomes
            .iter()
            .filter_map(|o| match o.outcome {
                RenameOutcome::Planned {
                    ref destination, ..
                } => Some((&o.source, destination)),
                _ => None,
            })
            .collect();
        if !planned.is_empty() {
            writeln!(f)?;
            writeln!(f, "Planned copies")?;
            writeln!(f, "--------------")?;
            for (source, destination) in planned {
                writeln!(f, "{} -> {}", source.display(), destination.display())?;
            }
        }

        let failures: Vec<_> = summary.failures().collect();
        if !failures.is_empty() {
            writeln!(f)?;
            writeln!(f, "Failures")?;
            writeln!(f, "--------")?;
            for (source, error) in failures {
                writeln!(f, "{}: {}", source.display(), error)?;
            }
        }

        Ok(())
    }
}
