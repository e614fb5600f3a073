use yew::prelude::*;

use crate::app::Page;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub authenticated: bool,
    pub on_navigate: Callback<Page>,
    pub on_logout: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let nav = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(page))
    };
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <nav class="bg-white shadow-sm border-b border-gray-100">
            <div class="container mx-auto px-6">
                <div class="flex justify-between items-center h-20">
                    <button
                        type="button"
                        class="text-2xl font-bold text-black tracking-tight"
                        onclick={nav(if props.authenticated { Page::Dashboard } else { Page::Login })}
                    >
                        {"SynapseGuard"}
                    </button>
                    <div class="flex items-center space-x-6">
                        { if props.authenticated {
                            html! {
                                <>
                                    <button type="button" class="text-gray-600 hover:text-black font-medium transition-colors" onclick={nav(Page::Dashboard)}>
                                        {"Dashboard"}
                                    </button>
                                    <button type="button" class="text-gray-600 hover:text-black font-medium transition-colors" onclick={on_logout}>
                                        {"Logout"}
                                    </button>
                                </>
                            }
                        } else {
                            html! {
                                <>
                                    <button type="button" class="text-gray-600 hover:text-black font-medium transition-colors" onclick={nav(Page::Login)}>
                                        {"Login"}
                                    </button>
                                    <button type="button" class="bg-gray-900 text-white px-5 py-2.5 rounded-lg font-medium hover:bg-black transition-all" onclick={nav(Page::Register)}>
                                        {"Register"}
                                    </button>
                                </>
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: String,
    pub accent: &'static str,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white p-6 rounded-2xl shadow-sm border border-gray-200 hover:shadow-md transition-shadow">
            <p class="text-gray-500 text-sm font-medium mb-1">{ props.title }</p>
            <p class={format!("text-3xl font-bold {}", props.accent)}>{ props.value.clone() }</p>
        </div>
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// "$1,234.50" style display. Callers decide how to show the sign.
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg class="w-4 h-4" fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_edit() -> Html {
    icon_base("M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z")
}

pub fn icon_trash() -> Html {
    icon_base("M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16")
}

#[cfg(test)]
mod tests {
    use super::format_money;

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(55.5), "$55.50");
        assert_eq!(format_money(1234.56), "$1,234.56");
        assert_eq!(format_money(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_money(-50.0), "-$50.00");
        assert_eq!(format_money(-0.004), "$0.00");
    }
}
