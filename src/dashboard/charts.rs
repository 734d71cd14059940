//! Chart generation and rendering for the tracker page.
//!
//! This module creates the ECharts visualizations derived from the ledger:
//! - **Monthly Spending Chart**: bar chart of totals per month label
//! - **Spending by Category Chart**: pie chart of totals per category
//! - **Budget Chart**: grouped bar chart pairing budgeted and spent amounts
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization
//! code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Emphasis, EmphasisFocus, JsFunction,
        Tooltip, Trigger,
    },
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    dashboard::aggregation::{aggregate_by_category, aggregate_by_month, budget_rows},
    ledger::{Budget, Transaction},
};

/// A chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for a row of charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        div class="grid grid-cols-1 xl:grid-cols-2 gap-4 w-full"
        {
            @for chart in charts {
                div
                    id=(chart.id)
                    class="min-h-[320px] rounded dark:bg-gray-100"
                {}
            }
        }
    )
}

/// Generates the JavaScript initialization code for the charts as an inline
/// script.
///
/// The script lives inside the content partial rather than the page head:
/// htmx executes script tags found in swapped-in fragments, so the charts
/// re-render after every mutation as well as on the initial page load. The
/// containers precede the script in the document, so the elements exist by
/// the time it runs.
pub(super) fn charts_script(charts: &[DashboardChart]) -> Markup {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    html!(
        script { (PreEscaped(script_content)) }
    )
}

pub(super) fn monthly_spending_chart(transactions: &[Transaction]) -> Chart {
    let (labels, values): (Vec<String>, Vec<f64>) =
        aggregate_by_month(transactions).into_iter().unzip();

    Chart::new()
        .title(
            Title::new()
                .text("Monthly Spending")
                .subtext("Totals per month, in the order they first appear"),
        )
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Bar::new().name("Total").data(values))
}

pub(super) fn category_pie_chart(transactions: &[Transaction]) -> Chart {
    let totals = aggregate_by_category(transactions);
    let data: Vec<(f64, &str)> = totals
        .iter()
        .map(|(category, total)| (*total, category.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Spending by Category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().bottom("0%"))
        .series(Pie::new().name("Spending").radius("60%").data(data))
}

pub(super) fn budget_chart(budgets: &[Budget], transactions: &[Transaction]) -> Chart {
    let rows = budget_rows(budgets, transactions);

    let categories: Vec<String> = rows.iter().map(|row| row.category.clone()).collect();
    let budgeted: Vec<f64> = rows.iter().map(|row| row.budgeted).collect();
    let spent: Vec<f64> = rows.iter().map(|row| row.spent).collect();

    Chart::new()
        .title(
            Title::new()
                .text("Budget vs Spending")
                .subtext("One pair of bars per budgeted category"),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().top("8%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(90)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(categories))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Bar::new()
                .name("Budgeted")
                .emphasis(Emphasis::new().focus(EmphasisFocus::Series))
                .data(budgeted),
        )
        .series(
            Bar::new()
                .name("Spent")
                .emphasis(Emphasis::new().focus(EmphasisFocus::Series))
                .data(spent),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod chart_tests {
    use time::macros::date;

    use crate::ledger::{Budget, CategoryName, Transaction};

    use super::{budget_chart, category_pie_chart, monthly_spending_chart};

    fn create_test_transaction(amount: f64, date: time::Date, category: &str) -> Transaction {
        Transaction {
            id: 0,
            amount,
            date,
            description: "test".to_owned(),
            category: CategoryName::new_unchecked(category),
        }
    }

    #[test]
    fn monthly_chart_options_contain_labels_and_totals() {
        let transactions = vec![
            create_test_transaction(100.0, date!(2024 - 01 - 01), "Food"),
            create_test_transaction(50.0, date!(2024 - 01 - 15), "Food"),
            create_test_transaction(30.0, date!(2024 - 02 - 01), "Rent"),
        ];

        let options = monthly_spending_chart(&transactions).to_string();

        assert!(options.contains("Jan"), "missing month label in {options}");
        assert!(options.contains("Feb"), "missing month label in {options}");
        assert!(options.contains("150"), "missing January total in {options}");
    }

    #[test]
    fn pie_chart_options_contain_category_totals() {
        let transactions = vec![
            create_test_transaction(100.0, date!(2024 - 01 - 01), "Food"),
            create_test_transaction(30.0, date!(2024 - 02 - 01), "Rent"),
        ];

        let options = category_pie_chart(&transactions).to_string();

        assert!(options.contains("Food"), "missing category in {options}");
        assert!(options.contains("Rent"), "missing category in {options}");
        assert!(options.contains("pie"), "want a pie series in {options}");
    }

    #[test]
    fn budget_chart_has_budgeted_and_spent_series() {
        let budgets = vec![Budget {
            category: CategoryName::new_unchecked("Rent"),
            amount: 200.0,
        }];
        let transactions = vec![create_test_transaction(30.0, date!(2024 - 02 - 01), "Rent")];

        let options = budget_chart(&budgets, &transactions).to_string();

        assert!(options.contains("Budgeted"), "missing series in {options}");
        assert!(options.contains("Spent"), "missing series in {options}");
        assert!(options.contains("200"), "missing budgeted amount in {options}");
    }
}
