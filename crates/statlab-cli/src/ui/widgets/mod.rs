pub(crate) use self::{
    frequency_display::{FrequencyChart, FrequencyTableDisplay},
    section_list::SectionList,
    summary_display::{
        CENTRAL_TENDENCY_ROWS, DISPERSION_ROWS, FIVE_NUMBER_ROWS, SummaryPanel,
    },
};

mod frequency_display;
mod section_list;
mod summary_display;
