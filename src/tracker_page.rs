//! The tracker page, the single page the app serves.
//!
//! The markup is a static shell: the summary cards, the entry form, and an
//! empty transaction list. `static/app.js` fills it in from the JSON API
//! and re-fetches after every mutation.

use maud::{Markup, html};

use crate::html::base;

/// Display the money tracker page.
pub async fn get_tracker_page() -> Markup {
    let content = html! {
        main class="tracker"
        {
            h1 { "Money Tracker" }

            section class="summary"
            {
                div class="summary-card"
                {
                    span class="summary-label" { "Income" }
                    strong id="summary-income" { "$0" }
                }

                div class="summary-card"
                {
                    span class="summary-label" { "Expense" }
                    strong id="summary-expense" { "$0" }
                }

                div class="summary-card"
                {
                    span class="summary-label" { "Balance" }
                    strong id="summary-balance" { "$0" }
                }
            }

            form id="transaction-form"
            {
                input name="title" id="title" placeholder="Title" autocomplete="off";

                input name="amount" id="amount" type="number" step="any" placeholder="Amount";

                select name="type" id="type"
                {
                    option value="expense" { "Expense" }
                    option value="income" { "Income" }
                }

                input name="date" id="date" type="date";

                button type="submit" { "Add" }
            }

            ul id="transactions" {}
        }
    };

    base("Money Tracker", &content)
}

#[cfg(test)]
mod tracker_page_tests {
    use super::get_tracker_page;

    #[tokio::test]
    async fn page_contains_form_summary_and_list() {
        let rendered = get_tracker_page().await.into_string();

        for id in [
            "transaction-form",
            "summary-income",
            "summary-expense",
            "summary-balance",
            "transactions",
        ] {
            assert!(
                rendered.contains(&format!("id=\"{id}\"")),
                "expected page to contain an element with id {id}"
            );
        }
    }
}
