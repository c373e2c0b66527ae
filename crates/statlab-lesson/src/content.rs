//! Static narrative content for each lesson section.
//!
//! The front-end renders these blocks verbatim; interactive material (the
//! frequency table, charts, and the calculator) is supplied by the front-end
//! itself and slots in after the narrative.

use crate::section::Section;

/// Narrative content of one lesson section.
#[derive(Debug, Clone, Copy)]
pub struct SectionBody {
    /// Opening paragraph shown under the section title.
    pub lead: &'static str,
    /// Topic blocks rendered in order.
    pub topics: &'static [Topic],
}

/// A titled block of narrative lines.
#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub heading: &'static str,
    pub lines: &'static [&'static str],
}

/// The narrative body of a section.
#[must_use]
pub fn body(section: Section) -> &'static SectionBody {
    match section {
        Section::Introduction => &INTRODUCTION,
        Section::DataPreparation => &DATA_PREPARATION,
        Section::DataPresentation => &DATA_PRESENTATION,
        Section::CentralTendency => &CENTRAL_TENDENCY,
        Section::Dispersion => &DISPERSION,
        Section::StatisticalSoftware => &STATISTICAL_SOFTWARE,
    }
}

static INTRODUCTION: SectionBody = SectionBody {
    lead: "Descriptive statistics involves methods for organizing, summarizing, and \
           presenting data in an informative way. It helps us understand the main features \
           of a dataset without making conclusions beyond the data we have analyzed.",
    topics: &[
        Topic {
            heading: "Key Purposes",
            lines: &[
                "Summarize large amounts of data concisely.",
                "Identify patterns and trends.",
                "Make data easier to understand and communicate.",
                "Provide a foundation for further analysis.",
            ],
        },
        Topic {
            heading: "Main Components",
            lines: &[
                "Data preparation: cleaning and organizing.",
                "Data presentation: tables and graphs.",
                "Central tendency: mean, median, mode.",
                "Dispersion: range, variance, standard deviation.",
            ],
        },
        Topic {
            heading: "How To Use This Lesson",
            lines: &[
                "Move between sections with the arrow keys and mark each one complete \
                 once it sinks in.",
                "The Statistical Software section ends with a calculator that runs every \
                 measure covered here on data you enter yourself.",
            ],
        },
    ],
};

static DATA_PREPARATION: SectionBody = SectionBody {
    lead: "Raw data often contains errors, missing values, or inconsistencies. Proper \
           preparation ensures accurate analysis and reliable results.",
    topics: &[
        Topic {
            heading: "1. Data Collection",
            lines: &[
                "Gather data from reliable sources through surveys, experiments, or \
                 existing databases.",
                "Example: test scores collected from a class of 30 students.",
            ],
        },
        Topic {
            heading: "2. Data Cleaning",
            lines: &[
                "Remove duplicates, handle missing values, and correct errors.",
                "Before: 85, 90, NA, 78, 85, 92",
                "After:  85, 90, 78, 85, 92",
            ],
        },
        Topic {
            heading: "3. Data Organization",
            lines: &[
                "Structure data in a logical format such as a spreadsheet, database, or \
                 array, so each observation is easy to find.",
            ],
        },
        Topic {
            heading: "4. Data Sorting",
            lines: &[
                "Arrange data in ascending or descending order for easier analysis.",
                "Unsorted: 92, 78, 85, 90, 88   Sorted: 78, 85, 88, 90, 92",
            ],
        },
        Topic {
            heading: "Key Takeaways",
            lines: &[
                "Clean data means accurate results.",
                "Always check for outliers and errors.",
                "Document any changes made to the original data.",
                "Proper organization saves time in analysis.",
            ],
        },
    ],
};

static DATA_PRESENTATION: SectionBody = SectionBody {
    lead: "Presenting data effectively makes patterns visible and insights accessible. \
           Both tabular and graphical methods have their place in statistical analysis.",
    topics: &[
        Topic {
            heading: "Frequency Tables",
            lines: &[
                "A frequency table shows how often each value, or range of values, occurs \
                 in a dataset.",
                "Use one to organize a large dataset into manageable groups, to show a \
                 distribution, or to prepare data for a chart.",
            ],
        },
        Topic {
            heading: "Charts",
            lines: &[
                "Bar charts compare categories; histograms show the shape of a \
                 distribution.",
                "The table and chart below are computed from the same 18 exam scores. \
                 Press Tab to switch between them.",
            ],
        },
    ],
};

static CENTRAL_TENDENCY: SectionBody = SectionBody {
    lead: "Central tendency measures identify the typical or central value in a dataset. \
           The three main measures are mean, median, and mode.",
    topics: &[
        Topic {
            heading: "Mean (Average)",
            lines: &[
                "Mean = sum of all values divided by the number of values.",
                "Example: 12, 15, 18, 20, 22, 25, 28, 30 has sum 170 across 8 values, so \
                 the mean is 21.25.",
                "Best when the data is numerical with no extreme outliers.",
            ],
        },
        Topic {
            heading: "Median (Middle Value)",
            lines: &[
                "Sort the data, then take the middle value; with an even count, average \
                 the two middle values.",
                "Example: for the data above the middle values are 20 and 22, so the \
                 median is 21.00.",
                "Best when the data is skewed or has outliers; the median resists both.",
            ],
        },
        Topic {
            heading: "Mode (Most Frequent)",
            lines: &[
                "The value that appears most frequently in the dataset.",
                "2, 3, 3, 5, 7, 3, 8 has mode 3.",
                "1, 2, 2, 3, 3, 4 is bimodal: 2 and 3.",
                "5, 10, 15, 20, 25 has no mode.",
                "Best for categorical data and for spotting the most popular item.",
            ],
        },
        Topic {
            heading: "Quick Comparison",
            lines: &[
                "Mean uses every data point but is affected by outliers.",
                "Median resists outliers but ignores the extremes entirely.",
                "Mode works with any data type but may not exist or be unique.",
            ],
        },
    ],
};

static DISPERSION: SectionBody = SectionBody {
    lead: "Dispersion measures tell us how spread out the data is. Two datasets can have \
           the same mean and still look nothing alike.",
    topics: &[
        Topic {
            heading: "Range",
            lines: &[
                "Range = maximum - minimum.",
                "Example: 10, 12, 15, 18, 20, 22, 25, 30 has range 30 - 10 = 20.",
                "Quick to compute, but it uses only two values and ignores the rest.",
            ],
        },
        Topic {
            heading: "Variance",
            lines: &[
                "The average squared deviation from the mean: sum of (x - mean)^2, \
                 divided by n.",
                "This lesson uses the population convention and divides by n, not n - 1.",
                "Example: the data above has mean 19 and variance 39.25.",
            ],
        },
        Topic {
            heading: "Standard Deviation",
            lines: &[
                "The square root of the variance, back in the data's original units.",
                "Example: the square root of 39.25 is about 6.26, so values sit roughly \
                 6.26 units from the mean on average.",
            ],
        },
        Topic {
            heading: "Interquartile Range (IQR)",
            lines: &[
                "IQR = Q3 - Q1, the spread of the middle 50% of the data.",
                "Q1 and Q3 are the 25th and 75th percentiles; extreme outliers barely \
                 move them.",
            ],
        },
        Topic {
            heading: "Choosing a Measure",
            lines: &[
                "Use range for a quick look at data without outliers.",
                "Use standard deviation when the data is roughly normal.",
                "Use IQR when outliers are present.",
                "Use variance when further calculations need its mathematical properties.",
            ],
        },
    ],
};

static STATISTICAL_SOFTWARE: SectionBody = SectionBody {
    lead: "Enter a dataset and the calculator reports every measure covered in this \
           lesson: central tendency, dispersion, and the five-number summary.",
    topics: &[Topic {
        heading: "Working With Real Tools",
        lines: &[
            "R and Python (pandas, SciPy) are free, powerful options for data analysis.",
            "SPSS is widely used in the social sciences; spreadsheets cover the basics.",
            "Whatever the tool, the measures mean exactly what this lesson taught.",
        ],
    }],
};
