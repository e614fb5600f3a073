use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::components::{format_money, icon_edit, icon_trash, StatCard};
use crate::metrics::{self, PortfolioSummary};
use crate::models::{Budget, BudgetPayload, Category, Expense, ExpensePayload};

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub api: ApiClient,
    /// Fired when an authenticated call comes back 401; the app clears the
    /// session and returns to the login page.
    pub on_unauthorized: Callback<()>,
}

fn refresh_budgets(
    api: ApiClient,
    budgets: UseStateHandle<Vec<Budget>>,
    loading: UseStateHandle<bool>,
    on_unauthorized: Callback<()>,
) {
    spawn_local(async move {
        match api.list_budgets().await {
            Ok(list) => budgets.set(list),
            Err(ApiError::Unauthorized) => on_unauthorized.emit(()),
            Err(err) => error!(format!("Error fetching budgets: {err}")),
        }
        loading.set(false);
    });
}

/// Log-and-refetch tail shared by every mutation. Failures other than 401 are
/// terminal for that action; the user retries by resubmitting.
fn finish_mutation(
    action: &'static str,
    result: Result<(), ApiError>,
    api: ApiClient,
    budgets: UseStateHandle<Vec<Budget>>,
    loading: UseStateHandle<bool>,
    on_unauthorized: Callback<()>,
) {
    match result {
        Ok(()) => refresh_budgets(api, budgets, loading, on_unauthorized),
        Err(ApiError::Unauthorized) => on_unauthorized.emit(()),
        Err(err) => error!(format!("Error {action}: {err}")),
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let budgets = use_state(Vec::<Budget>::new);
    let loading = use_state(|| true);
    let new_budget_name = use_state(|| "".to_string());
    let new_budget_limit = use_state(|| "".to_string());

    {
        let api = props.api.clone();
        let budgets = budgets.clone();
        let loading = loading.clone();
        let on_unauthorized = props.on_unauthorized.clone();
        use_effect_with_deps(
            move |_| {
                refresh_budgets(api, budgets, loading, on_unauthorized);
                || ()
            },
            (),
        );
    }

    let on_create_budget = {
        let api = props.api.clone();
        let budgets = budgets.clone();
        let loading = loading.clone();
        let on_unauthorized = props.on_unauthorized.clone();
        let new_budget_name = new_budget_name.clone();
        let new_budget_limit = new_budget_limit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = new_budget_name.trim().to_string();
            let Ok(limit) = new_budget_limit.trim().parse::<f64>() else {
                return;
            };
            if name.is_empty() {
                return;
            }

            let api = api.clone();
            let budgets = budgets.clone();
            let loading = loading.clone();
            let on_unauthorized = on_unauthorized.clone();
            let new_budget_name = new_budget_name.clone();
            let new_budget_limit = new_budget_limit.clone();
            spawn_local(async move {
                let result = api.create_budget(&BudgetPayload { name, limit }).await;
                if result.is_ok() {
                    // keep the input on failure so the user can resubmit
                    new_budget_name.set("".to_string());
                    new_budget_limit.set("".to_string());
                }
                finish_mutation("creating budget", result, api, budgets, loading, on_unauthorized);
            });
        })
    };

    let on_update_budget = {
        let api = props.api.clone();
        let budgets = budgets.clone();
        let loading = loading.clone();
        let on_unauthorized = props.on_unauthorized.clone();
        Callback::from(move |(budget_id, payload): (i64, BudgetPayload)| {
            let api = api.clone();
            let budgets = budgets.clone();
            let loading = loading.clone();
            let on_unauthorized = on_unauthorized.clone();
            spawn_local(async move {
                let result = api.update_budget(budget_id, &payload).await;
                finish_mutation("updating budget", result, api, budgets, loading, on_unauthorized);
            });
        })
    };

    let on_delete_budget = {
        let api = props.api.clone();
        let budgets = budgets.clone();
        let loading = loading.clone();
        let on_unauthorized = props.on_unauthorized.clone();
        Callback::from(move |budget_id: i64| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(
                        "Are you sure you want to delete this budget? \
                         This will also delete all expenses.",
                    )
                    .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let api = api.clone();
            let budgets = budgets.clone();
            let loading = loading.clone();
            let on_unauthorized = on_unauthorized.clone();
            spawn_local(async move {
                let result = api.delete_budget(budget_id).await;
                finish_mutation("deleting budget", result, api, budgets, loading, on_unauthorized);
            });
        })
    };

    let on_add_expense = {
        let api = props.api.clone();
        let budgets = budgets.clone();
        let loading = loading.clone();
        let on_unauthorized = props.on_unauthorized.clone();
        Callback::from(move |(budget_id, payload): (i64, ExpensePayload)| {
            let api = api.clone();
            let budgets = budgets.clone();
            let loading = loading.clone();
            let on_unauthorized = on_unauthorized.clone();
            spawn_local(async move {
                let result = api.create_expense(budget_id, &payload).await;
                finish_mutation("adding expense", result, api, budgets, loading, on_unauthorized);
            });
        })
    };

    let on_update_expense = {
        let api = props.api.clone();
        let budgets = budgets.clone();
        let loading = loading.clone();
        let on_unauthorized = props.on_unauthorized.clone();
        Callback::from(
            move |(budget_id, expense_id, payload): (i64, i64, ExpensePayload)| {
                let api = api.clone();
                let budgets = budgets.clone();
                let loading = loading.clone();
                let on_unauthorized = on_unauthorized.clone();
                spawn_local(async move {
                    let result = api.update_expense(budget_id, expense_id, &payload).await;
                    finish_mutation(
                        "updating expense",
                        result,
                        api,
                        budgets,
                        loading,
                        on_unauthorized,
                    );
                });
            },
        )
    };

    let on_delete_expense = {
        let api = props.api.clone();
        let budgets = budgets.clone();
        let loading = loading.clone();
        let on_unauthorized = props.on_unauthorized.clone();
        Callback::from(move |(budget_id, expense_id): (i64, i64)| {
            let api = api.clone();
            let budgets = budgets.clone();
            let loading = loading.clone();
            let on_unauthorized = on_unauthorized.clone();
            spawn_local(async move {
                let result = api.delete_expense(budget_id, expense_id).await;
                finish_mutation("deleting expense", result, api, budgets, loading, on_unauthorized);
            });
        })
    };

    if *loading {
        return html! {
            <div class="flex justify-center items-center h-screen">
                <div class="animate-spin rounded-full h-16 w-16 border-b-4 border-gray-900"></div>
            </div>
        };
    }

    let summary = PortfolioSummary::of(&budgets);
    let remaining_accent = if summary.remaining < 0.0 {
        "text-red-600"
    } else {
        "text-green-600"
    };
    let usage_accent = if summary.avg_usage_percent >= 100.0 {
        "text-red-600"
    } else if summary.avg_usage_percent >= 75.0 {
        "text-orange-500"
    } else {
        "text-green-600"
    };

    html! {
        <div class="max-w-7xl mx-auto px-4">
            <div class="mb-6">
                <h1 class="text-3xl font-bold text-black mb-1">{"My Budgets"}</h1>
                <p class="text-gray-500 text-sm">{"Track and manage your spending"}</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 mb-6">
                <StatCard title="Total Budgets" value={summary.budget_count.to_string()} accent="text-black" />
                <StatCard title="Total Spending" value={format_money(summary.spending_sum)} accent="text-red-600" />
                <StatCard title="Remaining Budget" value={format_money(summary.remaining.abs())} accent={remaining_accent} />
                <StatCard title="Budget Usage" value={format!("{:.1}%", summary.avg_usage_percent)} accent={usage_accent} />
            </div>

            <div class="bg-white p-6 rounded-2xl shadow-sm mb-6 border border-gray-200">
                <h2 class="text-lg font-bold mb-4 text-black">{"Create New Budget"}</h2>
                <form onsubmit={on_create_budget} class="flex flex-col md:flex-row gap-3">
                    <input
                        type="text"
                        placeholder="Budget Name (e.g., Groceries)"
                        class="flex-1 px-4 py-2.5 border border-gray-300 rounded-lg focus:outline-none focus:border-gray-900 text-sm"
                        value={(*new_budget_name).clone()}
                        oninput={{
                            let new_budget_name = new_budget_name.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                new_budget_name.set(input.value());
                            })
                        }}
                        required={true}
                    />
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="Limit"
                        class="w-full md:w-32 px-4 py-2.5 border border-gray-300 rounded-lg focus:outline-none focus:border-gray-900 text-sm"
                        value={(*new_budget_limit).clone()}
                        oninput={{
                            let new_budget_limit = new_budget_limit.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                new_budget_limit.set(input.value());
                            })
                        }}
                        required={true}
                    />
                    <button
                        type="submit"
                        class="bg-gray-900 text-white px-6 py-2.5 rounded-lg font-medium hover:bg-black transition-all text-sm"
                    >
                        {"Create Budget"}
                    </button>
                </form>
            </div>

            <div class="grid gap-4">
                { for budgets.iter().map(|budget| html! {
                    <BudgetCard
                        key={budget.id}
                        budget={budget.clone()}
                        on_add_expense={on_add_expense.clone()}
                        on_update_expense={on_update_expense.clone()}
                        on_delete_expense={on_delete_expense.clone()}
                        on_update_budget={on_update_budget.clone()}
                        on_delete_budget={on_delete_budget.clone()}
                    />
                }) }
            </div>
        </div>
    }
}

/// Draft of an expense being edited inline; amount stays a string until save.
#[derive(Clone, PartialEq)]
struct ExpenseDraft {
    id: i64,
    description: String,
    amount: String,
    category: Category,
}

impl ExpenseDraft {
    fn from_expense(expense: &Expense) -> Self {
        ExpenseDraft {
            id: expense.id,
            description: expense.description.clone(),
            amount: expense.amount.to_string(),
            category: expense.category,
        }
    }
}

#[derive(Properties, PartialEq)]
struct BudgetCardProps {
    budget: Budget,
    on_add_expense: Callback<(i64, ExpensePayload)>,
    on_update_expense: Callback<(i64, i64, ExpensePayload)>,
    on_delete_expense: Callback<(i64, i64)>,
    on_update_budget: Callback<(i64, BudgetPayload)>,
    on_delete_budget: Callback<i64>,
}

#[function_component(BudgetCard)]
fn budget_card(props: &BudgetCardProps) -> Html {
    let budget = &props.budget;

    // collapsed <-> expanded; within expanded, budget edit and expense edit
    // are mutually exclusive
    let expanded = use_state(|| false);
    let show_expenses = use_state(|| false);
    let editing_budget = use_state(|| false);
    let editing_expense = use_state(|| None::<ExpenseDraft>);

    let edit_name = use_state(|| budget.name.clone());
    let edit_limit = use_state(|| budget.limit.to_string());

    let new_description = use_state(|| "".to_string());
    let new_amount = use_state(|| "".to_string());
    let new_category = use_state(|| Category::General);

    let total = metrics::total_spent(budget);
    let remaining = metrics::remaining(budget);
    let percent = metrics::percent_used(budget);

    let on_toggle = {
        let expanded = expanded.clone();
        let editing_budget = editing_budget.clone();
        Callback::from(move |_| {
            // editing the name/limit suppresses the collapse toggle
            if !*editing_budget {
                expanded.set(!*expanded);
            }
        })
    };

    let on_start_budget_edit = {
        let editing_budget = editing_budget.clone();
        let editing_expense = editing_expense.clone();
        let edit_name = edit_name.clone();
        let edit_limit = edit_limit.clone();
        let name = budget.name.clone();
        let limit = budget.limit;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            edit_name.set(name.clone());
            edit_limit.set(limit.to_string());
            editing_expense.set(None);
            editing_budget.set(true);
        })
    };

    let on_save_budget_edit = {
        let editing_budget = editing_budget.clone();
        let edit_name = edit_name.clone();
        let edit_limit = edit_limit.clone();
        let on_update_budget = props.on_update_budget.clone();
        let budget_id = budget.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let name = edit_name.trim().to_string();
            let Ok(limit) = edit_limit.trim().parse::<f64>() else {
                return;
            };
            if name.is_empty() {
                return;
            }
            on_update_budget.emit((budget_id, BudgetPayload { name, limit }));
            editing_budget.set(false);
        })
    };

    let on_cancel_budget_edit = {
        let editing_budget = editing_budget.clone();
        let edit_name = edit_name.clone();
        let edit_limit = edit_limit.clone();
        let name = budget.name.clone();
        let limit = budget.limit;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            edit_name.set(name.clone());
            edit_limit.set(limit.to_string());
            editing_budget.set(false);
        })
    };

    let on_delete = {
        let on_delete_budget = props.on_delete_budget.clone();
        let budget_id = budget.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete_budget.emit(budget_id);
        })
    };

    let on_submit_expense = {
        let new_description = new_description.clone();
        let new_amount = new_amount.clone();
        let new_category = new_category.clone();
        let on_add_expense = props.on_add_expense.clone();
        let budget_id = budget.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let description = new_description.trim().to_string();
            let Ok(amount) = new_amount.trim().parse::<f64>() else {
                return;
            };
            if description.is_empty() {
                return;
            }
            on_add_expense.emit((
                budget_id,
                ExpensePayload {
                    description,
                    amount,
                    category: *new_category,
                },
            ));
            new_description.set("".to_string());
            new_amount.set("".to_string());
            new_category.set(Category::General);
        })
    };

    let on_toggle_expenses = {
        let show_expenses = show_expenses.clone();
        Callback::from(move |_| show_expenses.set(!*show_expenses))
    };

    let bar_class = if percent >= 100.0 {
        "h-2 rounded-full transition-all duration-500 bg-red-500"
    } else if percent >= 75.0 {
        "h-2 rounded-full transition-all duration-500 bg-orange-400"
    } else {
        "h-2 rounded-full transition-all duration-500 bg-gray-900"
    };

    let header = if *editing_budget {
        html! {
            <div class="flex gap-2 flex-1" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <input
                    type="text"
                    class="px-3 py-1.5 border border-gray-300 rounded-lg focus:outline-none focus:border-gray-900 text-sm"
                    value={(*edit_name).clone()}
                    oninput={{
                        let edit_name = edit_name.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            edit_name.set(input.value());
                        })
                    }}
                />
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    class="w-32 px-3 py-1.5 border border-gray-300 rounded-lg focus:outline-none focus:border-gray-900 text-sm"
                    value={(*edit_limit).clone()}
                    oninput={{
                        let edit_limit = edit_limit.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            edit_limit.set(input.value());
                        })
                    }}
                />
                <button onclick={on_save_budget_edit} class="px-3 py-1.5 bg-gray-900 text-white rounded-lg hover:bg-black text-sm">{"Save"}</button>
                <button onclick={on_cancel_budget_edit} class="px-3 py-1.5 bg-gray-400 text-white rounded-lg hover:bg-gray-500 text-sm">{"Cancel"}</button>
            </div>
        }
    } else {
        html! {
            <div>
                <h3 class="text-lg font-bold text-black">{ budget.name.clone() }</h3>
                <p class="text-xs text-gray-500">{ format!("Budget Limit: {}", format_money(budget.limit)) }</p>
            </div>
        }
    };

    html! {
        <div class="bg-white rounded-2xl shadow-sm hover:shadow-md transition-all duration-200 overflow-hidden border border-gray-200">
            <div class="p-5 cursor-pointer hover:bg-gray-50 transition-colors" onclick={on_toggle}>
                <div class="flex justify-between items-center">
                    <div class="flex items-center gap-3 flex-1">
                        <span class={format!("transform transition-transform duration-200 text-gray-400 {}", if *expanded { "rotate-90" } else { "" })}>
                            {"▶"}
                        </span>
                        { header }
                    </div>
                    <div class="flex items-center gap-3">
                        <div class="text-right">
                            <p class={format!("text-2xl font-bold {}", if remaining < 0.0 { "text-red-600" } else { "text-green-600" })}>
                                { format_money(remaining.abs()) }
                            </p>
                            <p class="text-xs text-gray-500">{ if remaining < 0.0 { "Over Budget" } else { "Remaining" } }</p>
                        </div>
                        { if !*editing_budget {
                            html! {
                                <div class="flex gap-1">
                                    <button
                                        onclick={on_start_budget_edit}
                                        class="p-1.5 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-all"
                                        title="Edit Budget"
                                    >
                                        { icon_edit() }
                                    </button>
                                    <button
                                        onclick={on_delete}
                                        class="p-1.5 bg-red-50 text-red-600 rounded-lg hover:bg-red-100 transition-all"
                                        title="Delete Budget"
                                    >
                                        { icon_trash() }
                                    </button>
                                </div>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                </div>

                <div class="mt-3">
                    <div class="flex justify-between text-xs text-gray-600 mb-1">
                        <span>{ format!("{} spent", format_money(total)) }</span>
                        <span>{ format!("{:.1}%", percent) }</span>
                    </div>
                    <div class="w-full bg-gray-200 rounded-full h-2 overflow-hidden">
                        <div class={bar_class} style={format!("width: {}%", percent)}></div>
                    </div>
                </div>
            </div>

            { if *expanded {
                html! {
                    <div class="px-5 pb-5 border-t border-gray-100">
                        <form onsubmit={on_submit_expense} class="mt-4 p-4 bg-gray-50 rounded-lg border border-gray-200">
                            <h4 class="font-bold text-black mb-3 text-sm">{"Add Expense"}</h4>
                            <div class="grid grid-cols-1 md:grid-cols-4 gap-3">
                                <input
                                    type="text"
                                    placeholder="Description"
                                    class="px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-gray-900 text-sm"
                                    value={(*new_description).clone()}
                                    oninput={{
                                        let new_description = new_description.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            new_description.set(input.value());
                                        })
                                    }}
                                    required={true}
                                />
                                <input
                                    type="number"
                                    step="0.01"
                                    placeholder="Amount"
                                    class="px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-gray-900 text-sm"
                                    value={(*new_amount).clone()}
                                    oninput={{
                                        let new_amount = new_amount.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            new_amount.set(input.value());
                                        })
                                    }}
                                    required={true}
                                />
                                { category_select((*new_category).clone(), {
                                    let new_category = new_category.clone();
                                    Callback::from(move |cat| new_category.set(cat))
                                }) }
                                <button
                                    type="submit"
                                    class="bg-gray-900 text-white px-4 py-2 rounded-lg font-medium hover:bg-black transition-all text-sm"
                                >
                                    {"Add"}
                                </button>
                            </div>
                        </form>

                        <div class="mt-4">
                            <button
                                onclick={on_toggle_expenses}
                                class="flex items-center gap-2 text-gray-900 hover:text-black font-semibold mb-2 transition-colors text-sm"
                            >
                                <span class={format!("transform transition-transform {}", if *show_expenses { "rotate-90" } else { "" })}>{"▶"}</span>
                                { format!("{} Expenses", budget.expenses.len()) }
                            </button>

                            { if *show_expenses {
                                html! {
                                    <div class="space-y-2 mt-3">
                                        { if budget.expenses.is_empty() {
                                            html! {
                                                <p class="text-gray-400 text-center py-6 bg-gray-50 rounded-lg text-sm">{"No expenses yet"}</p>
                                            }
                                        } else {
                                            html! {
                                                <>
                                                { for budget.expenses.iter().map(|expense| expense_row(
                                                    budget.id,
                                                    expense,
                                                    &editing_expense,
                                                    &editing_budget,
                                                    &props.on_update_expense,
                                                    &props.on_delete_expense,
                                                )) }
                                                </>
                                            }
                                        }}
                                    </div>
                                }
                            } else {
                                html! {}
                            }}
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

fn category_select(selected: Category, on_change: Callback<Category>) -> Html {
    html! {
        <select
            class="px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-gray-900 text-sm"
            onchange={Callback::from(move |e: Event| {
                let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                on_change.emit(Category::from(input.value()));
            })}
        >
            { for Category::ALL.iter().map(|cat| html! {
                <option value={cat.as_str()} selected={*cat == selected}>{ cat.as_str() }</option>
            }) }
        </select>
    }
}

fn expense_row(
    budget_id: i64,
    expense: &Expense,
    editing_expense: &UseStateHandle<Option<ExpenseDraft>>,
    editing_budget: &UseStateHandle<bool>,
    on_update_expense: &Callback<(i64, i64, ExpensePayload)>,
    on_delete_expense: &Callback<(i64, i64)>,
) -> Html {
    let draft = editing_expense
        .as_ref()
        .filter(|d| d.id == expense.id)
        .cloned();

    if let Some(draft) = draft {
        let on_save = {
            let editing_expense = editing_expense.clone();
            let on_update_expense = on_update_expense.clone();
            let draft = draft.clone();
            Callback::from(move |_| {
                let description = draft.description.trim().to_string();
                let Ok(amount) = draft.amount.trim().parse::<f64>() else {
                    return;
                };
                if description.is_empty() {
                    return;
                }
                on_update_expense.emit((
                    budget_id,
                    draft.id,
                    ExpensePayload {
                        description,
                        amount,
                        category: draft.category,
                    },
                ));
                editing_expense.set(None);
            })
        };
        let on_cancel = {
            let editing_expense = editing_expense.clone();
            Callback::from(move |_| editing_expense.set(None))
        };
        let set_description = {
            let editing_expense = editing_expense.clone();
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                editing_expense.set(Some(ExpenseDraft {
                    description: input.value(),
                    ..draft.clone()
                }));
            })
        };
        let set_amount = {
            let editing_expense = editing_expense.clone();
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                editing_expense.set(Some(ExpenseDraft {
                    amount: input.value(),
                    ..draft.clone()
                }));
            })
        };
        let set_category = {
            let editing_expense = editing_expense.clone();
            let draft = draft.clone();
            Callback::from(move |category| {
                editing_expense.set(Some(ExpenseDraft {
                    category,
                    ..draft.clone()
                }));
            })
        };

        html! {
            <div key={expense.id} class="p-4 bg-gray-50 rounded-lg border border-gray-300">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-2 mb-2">
                    <input
                        type="text"
                        class="px-3 py-1.5 border border-gray-300 rounded-lg focus:outline-none focus:border-gray-900 text-sm"
                        value={draft.description.clone()}
                        oninput={set_description}
                    />
                    <input
                        type="number"
                        step="0.01"
                        class="px-3 py-1.5 border border-gray-300 rounded-lg focus:outline-none focus:border-gray-900 text-sm"
                        value={draft.amount.clone()}
                        oninput={set_amount}
                    />
                    { category_select(draft.category, set_category) }
                    <div class="flex gap-2">
                        <button
                            onclick={on_save}
                            class="flex-1 bg-gray-900 text-white px-3 py-1.5 rounded-lg hover:bg-black transition-all text-sm font-medium"
                        >
                            {"Save"}
                        </button>
                        <button
                            onclick={on_cancel}
                            class="flex-1 bg-gray-400 text-white px-3 py-1.5 rounded-lg hover:bg-gray-500 transition-all text-sm font-medium"
                        >
                            {"Cancel"}
                        </button>
                    </div>
                </div>
            </div>
        }
    } else {
        let on_edit = {
            let editing_expense = editing_expense.clone();
            let editing_budget = editing_budget.clone();
            let draft = ExpenseDraft::from_expense(expense);
            Callback::from(move |_| {
                editing_budget.set(false);
                editing_expense.set(Some(draft.clone()));
            })
        };
        let on_delete = {
            let on_delete_expense = on_delete_expense.clone();
            let expense_id = expense.id;
            Callback::from(move |_| on_delete_expense.emit((budget_id, expense_id)))
        };

        html! {
            <div key={expense.id} class="flex justify-between items-center p-3 bg-white rounded-lg hover:bg-gray-50 transition-all border border-gray-200">
                <div class="flex-1">
                    <p class="font-medium text-gray-900 text-sm">{ expense.description.clone() }</p>
                    <span class="inline-block px-2 py-0.5 bg-gray-100 rounded-full text-xs text-gray-600 mt-1">
                        { expense.category.as_str() }
                    </span>
                </div>
                <div class="flex items-center gap-3">
                    <p class="font-semibold text-gray-900 text-base">{ format!("-{}", format_money(expense.amount)) }</p>
                    <div class="flex gap-1">
                        <button
                            onclick={on_edit}
                            class="p-1.5 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-all"
                            title="Edit"
                        >
                            { icon_edit() }
                        </button>
                        <button
                            onclick={on_delete}
                            class="p-1.5 bg-red-50 text-red-600 rounded-lg hover:bg-red-100 transition-all"
                            title="Delete"
                        >
                            { icon_trash() }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
