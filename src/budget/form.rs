//! The budget form view.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// Render the form for setting a category's monthly budget.
pub(crate) fn budget_form() -> Markup {
    html! {
        form
            hx-post=(endpoints::BUDGETS_API)
            hx-target="#dashboard-content"
            hx-swap="innerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label
                    for="budget-category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category"
                }

                input
                    name="category"
                    id="budget-category"
                    type="text"
                    placeholder="Category"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="budget-amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Monthly Budget"
                }

                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="budget-amount"
                        type="number"
                        step="0.01"
                        placeholder="0.01"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Set Budget" }
        }
    }
}

#[cfg(test)]
mod budget_form_tests {
    use scraper::Html;

    use crate::{
        endpoints,
        test_utils::{
            assert_form_input, assert_form_submit_button_with_text, assert_hx_endpoint,
            must_get_form,
        },
    };

    use super::budget_form;

    #[test]
    fn renders_both_fields_and_submit_button() {
        let markup = budget_form();
        let html = Html::parse_fragment(&markup.into_string());

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::BUDGETS_API, "hx-post");
        assert_form_input(&form, "category", "text");
        assert_form_input(&form, "amount", "number");
        assert_form_submit_button_with_text(&form, "Set Budget");
    }
}
