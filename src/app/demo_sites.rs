use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::DemoSite;
use crate::palette::{with_alpha, Palette};

use super::icon::Icon;

/// Renders the template for a catalog entry with that entry's palette.
#[component]
pub fn DemoSiteView(demo: &'static DemoSite) -> impl IntoView {
    let theme = demo.theme;
    let body = match demo.id {
        "ecommerce" => view! { <EcommerceSite theme /> }.into_any(),
        "saas" => view! { <SaasSite theme /> }.into_any(),
        "restaurant" => view! { <RestaurantSite theme /> }.into_any(),
        "fitness" => view! { <FitnessSite theme /> }.into_any(),
        "agency" => view! { <AgencySite theme /> }.into_any(),
        other => {
            log::warn!("no template for demo `{other}`");
            ().into_any()
        }
    };
    view! {
        <Title text=demo.name />
        <div
            class="min-h-screen pt-20"
            style=format!("background-color: {}; color: {}", theme.bg, theme.text)
        >
            {body}
            <DemoFooter demo />
        </div>
    }
}

/// `2499` -> `$2,499`
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[component]
fn DemoFooter(demo: &'static DemoSite) -> impl IntoView {
    let t = demo.theme;
    view! {
        <footer
            class="py-8 px-6 text-center text-sm border-t"
            style=format!("border-color: {}; color: {}", t.border, t.muted)
        >
            {format!("{} is a demo template. Nothing here is for sale.", demo.name)}
        </footer>
    }
}

struct Product {
    name: &'static str,
    price: u32,
    category: &'static str,
    icon: &'static str,
}

const PRODUCTS: [Product; 6] = [
    Product { name: "Midnight Chronograph", price: 2499, category: "Watches", icon: "ph:watch-bold" },
    Product { name: "Obsidian Leather Bag", price: 899, category: "Bags", icon: "ph:bag-bold" },
    Product { name: "Diamond Pavé Ring", price: 3299, category: "Jewelry", icon: "ph:diamond-bold" },
    Product { name: "Silk Evening Scarf", price: 449, category: "Accessories", icon: "ph:scarf-bold" },
    Product { name: "Gold Cuff Bracelet", price: 1299, category: "Jewelry", icon: "ph:circles-three-bold" },
    Product { name: "Cashmere Coat", price: 2199, category: "Apparel", icon: "ph:coat-hanger-bold" },
];

#[component]
fn EcommerceSite(theme: Palette) -> impl IntoView {
    let t = theme;
    view! {
        <section class="relative min-h-[80vh] flex items-center justify-center overflow-hidden">
            <div
                class="absolute inset-0"
                style=format!(
                    "background: linear-gradient(135deg, {}, transparent 50%)",
                    with_alpha(t.accent, "15"),
                )
            ></div>
            <div class="relative z-10 text-center px-6 max-w-4xl">
                <p
                    class="text-sm tracking-[0.3em] uppercase mb-4"
                    style=format!("color: {}", t.accent)
                >
                    "New Collection"
                </p>
                <h1 class="text-5xl md:text-7xl font-serif font-light mb-6 tracking-tight">
                    "Timeless " <span style=format!("color: {}", t.accent)>"Luxury"</span>
                </h1>
                <p class="text-lg mb-8" style=format!("color: {}", t.muted)>
                    "Discover our curated selection of premium accessories and apparel"
                </p>
                <button
                    class="px-10 py-4 text-sm tracking-widest uppercase hover:scale-105"
                    style=format!("background-color: {}; color: {}", t.accent, t.bg)
                >
                    "Shop Collection"
                </button>
            </div>
        </section>
        <section class="py-20 px-6">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-3xl font-serif mb-12">"Featured Products"</h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PRODUCTS
                        .iter()
                        .map(|p| {
                            view! {
                                <div class="group cursor-pointer">
                                    <div
                                        class="aspect-square rounded-lg mb-4 flex items-center justify-center"
                                        style=format!("background-color: {}", t.surface)
                                    >
                                        <Icon
                                            icon=p.icon
                                            class="w-24 h-24"
                                            style=format!("color: {}", t.accent)
                                        />
                                    </div>
                                    <p
                                        class="text-xs tracking-widest uppercase mb-2"
                                        style=format!("color: {}", t.muted)
                                    >
                                        {p.category}
                                    </p>
                                    <h3 class="font-serif text-xl mb-2">{p.name}</h3>
                                    <p style=format!("color: {}", t.accent)>{format_price(p.price)}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

struct Stat {
    label: &'static str,
    value: &'static str,
    change: &'static str,
    icon: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { label: "Total Revenue", value: "$84,254", change: "+12.5%", icon: "ph:currency-dollar-bold" },
    Stat { label: "Active Users", value: "24,521", change: "+8.2%", icon: "ph:users-bold" },
    Stat { label: "Conversion Rate", value: "3.24%", change: "+2.1%", icon: "ph:chart-line-up-bold" },
    Stat { label: "Avg. Session", value: "4m 32s", change: "-0.8%", icon: "ph:clock-bold" },
];

const CHART: [u32; 12] = [35, 58, 42, 75, 68, 90, 85, 95, 78, 88, 92, 85];

#[component]
fn SaasSite(theme: Palette) -> impl IntoView {
    let t = theme;
    let peak = CHART.iter().copied().max().unwrap_or(1);
    view! {
        <section class="max-w-7xl mx-auto px-6 py-12">
            <h1 class="text-3xl font-bold mb-2">"Dashboard"</h1>
            <p class="mb-8" style=format!("color: {}", t.muted)>
                "Welcome back. Here is what happened this month."
            </p>
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                {STATS
                    .iter()
                    .map(|s| {
                        let change_color = if s.change.starts_with('-') { "#ef4444" } else { "#22c55e" };
                        view! {
                            <div
                                class="p-6 rounded-2xl"
                                style=format!(
                                    "background-color: {}; border: 1px solid {}",
                                    t.surface,
                                    t.border,
                                )
                            >
                                <div class="flex items-center justify-between mb-4">
                                    <Icon icon=s.icon class="w-6 h-6" style=format!("color: {}", t.accent) />
                                    <span class="text-sm" style=format!("color: {change_color}")>
                                        {s.change}
                                    </span>
                                </div>
                                <div class="text-2xl font-bold">{s.value}</div>
                                <div class="text-sm" style=format!("color: {}", t.muted)>
                                    {s.label}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                class="p-6 rounded-2xl"
                style=format!("background-color: {}; border: 1px solid {}", t.surface, t.border)
            >
                <h2 class="font-semibold mb-6">"Revenue Overview"</h2>
                <div class="flex items-end gap-2 h-48">
                    {CHART
                        .iter()
                        .map(|v| {
                            view! {
                                <div
                                    class="flex-1 rounded-t-md"
                                    style=format!(
                                        "height: {}%; background: linear-gradient(to top, {}, {})",
                                        v * 100 / peak,
                                        t.accent,
                                        t.accent_alt,
                                    )
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

struct Dish {
    name: &'static str,
    description: &'static str,
    price: u32,
    category: &'static str,
}

const MENU: [Dish; 4] = [
    Dish { name: "Truffle Risotto", description: "Arborio rice, black truffle, parmesan", price: 38, category: "Mains" },
    Dish { name: "Wagyu Carpaccio", description: "A5 wagyu, capers, aged balsamic", price: 45, category: "Starters" },
    Dish { name: "Lobster Thermidor", description: "Maine lobster, cognac cream, gruyère", price: 68, category: "Mains" },
    Dish { name: "Chocolate Soufflé", description: "Valrhona chocolate, crème anglaise", price: 18, category: "Desserts" },
];

#[component]
fn RestaurantSite(theme: Palette) -> impl IntoView {
    let t = theme;
    view! {
        <section class="min-h-[70vh] flex items-center justify-center text-center px-6">
            <div class="max-w-3xl">
                <p class="uppercase tracking-[0.3em] text-sm mb-4" style=format!("color: {}", t.accent)>
                    "Est. 1987"
                </p>
                <h1 class="text-5xl md:text-7xl font-serif mb-6">"Savoria"</h1>
                <p class="text-lg mb-8" style=format!("color: {}", t.muted)>
                    "Seasonal Italian cooking in the heart of the city"
                </p>
                <button
                    class="px-8 py-4 rounded-full font-medium"
                    style=format!("background-color: {}; color: {}", t.accent, t.text)
                >
                    "Reserve a Table"
                </button>
            </div>
        </section>
        <section class="py-20 px-6" style=format!("background-color: {}", t.surface)>
            <div class="max-w-4xl mx-auto">
                <h2 class="text-3xl font-serif text-center mb-12">"Tonight's Menu"</h2>
                {MENU
                    .iter()
                    .map(|d| {
                        view! {
                            <div
                                class="flex items-baseline justify-between py-6 border-b"
                                style=format!("border-color: {}", t.border)
                            >
                                <div>
                                    <span class="text-xs uppercase mr-3" style=format!("color: {}", t.accent)>
                                        {d.category}
                                    </span>
                                    <span class="text-xl font-serif">{d.name}</span>
                                    <p class="text-sm mt-1" style=format!("color: {}", t.muted)>
                                        {d.description}
                                    </p>
                                </div>
                                <span class="text-xl" style=format!("color: {}", t.accent)>
                                    {format_price(d.price)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

struct Workout {
    name: &'static str,
    duration: &'static str,
    calories: u32,
    level: &'static str,
    icon: &'static str,
}

const WORKOUTS: [Workout; 4] = [
    Workout { name: "HIIT Blast", duration: "30 min", calories: 450, level: "Advanced", icon: "ph:fire-bold" },
    Workout { name: "Strength Builder", duration: "45 min", calories: 380, level: "Intermediate", icon: "ph:barbell-bold" },
    Workout { name: "Yoga Flow", duration: "60 min", calories: 200, level: "Beginner", icon: "ph:person-simple-bold" },
    Workout { name: "Core Crusher", duration: "25 min", calories: 280, level: "Intermediate", icon: "ph:lightning-bold" },
];

const WEEK: [(&str, bool, &str); 7] = [
    ("Mon", true, "HIIT"),
    ("Tue", true, "Strength"),
    ("Wed", true, "Yoga"),
    ("Thu", false, "Rest"),
    ("Fri", false, "HIIT"),
    ("Sat", false, "Strength"),
    ("Sun", false, "Rest"),
];

#[component]
fn FitnessSite(theme: Palette) -> impl IntoView {
    let t = theme;
    let done = WEEK.iter().filter(|(_, completed, _)| *completed).count();
    view! {
        <section class="max-w-6xl mx-auto px-6 py-12">
            <h1 class="text-4xl font-black uppercase mb-2">
                "Forge your " <span style=format!("color: {}", t.accent)>"strength"</span>
            </h1>
            <p class="mb-10" style=format!("color: {}", t.muted)>
                {format!("{done} of {} sessions done this week", WEEK.len())}
            </p>
            <div class="grid grid-cols-7 gap-2 mb-12">
                {WEEK
                    .iter()
                    .map(|(day, completed, workout)| {
                        let style = if *completed {
                            format!("background-color: {}; color: {}", t.accent, t.bg)
                        } else {
                            format!("background-color: {}; color: {}", t.surface, t.muted)
                        };
                        view! {
                            <div class="p-3 rounded-xl text-center" style=style>
                                <div class="font-bold">{*day}</div>
                                <div class="text-xs">{*workout}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid md:grid-cols-2 gap-6">
                {WORKOUTS
                    .iter()
                    .map(|w| {
                        view! {
                            <div
                                class="p-6 rounded-2xl flex items-center gap-4"
                                style=format!(
                                    "background-color: {}; border: 1px solid {}",
                                    t.surface,
                                    t.border,
                                )
                            >
                                <div
                                    class="w-14 h-14 rounded-xl flex items-center justify-center"
                                    style=format!("background-color: {}", with_alpha(t.accent, "20"))
                                >
                                    <Icon icon=w.icon class="w-7 h-7" style=format!("color: {}", t.accent) />
                                </div>
                                <div>
                                    <h3 class="font-bold text-lg">{w.name}</h3>
                                    <p class="text-sm" style=format!("color: {}", t.muted)>
                                        {format!("{} · {} kcal · {}", w.duration, w.calories, w.level)}
                                    </p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

const PROJECTS: [(&str, &str, &str); 4] = [
    ("Nova Brand Identity", "Branding", "2024"),
    ("Quantum App Design", "UI/UX", "2024"),
    ("Stellar Campaign", "Marketing", "2023"),
    ("Echo Website", "Development", "2023"),
];

const SERVICES: [(&str, &str, &str); 4] = [
    ("ph:paint-brush-bold", "Brand Design", "50+"),
    ("ph:devices-bold", "Web Design", "120+"),
    ("ph:megaphone-bold", "Marketing", "80+"),
    ("ph:code-bold", "Development", "90+"),
];

#[component]
fn AgencySite(theme: Palette) -> impl IntoView {
    let t = theme;
    view! {
        <section class="max-w-6xl mx-auto px-6 py-20">
            <h1 class="text-6xl md:text-8xl font-bold tracking-tight mb-8">
                "We design " <span style=format!("color: {}", t.accent)>"paradigms"</span>
            </h1>
            <p class="text-xl max-w-2xl" style=format!("color: {}", t.muted)>
                "An independent studio crafting brands, products and campaigns."
            </p>
        </section>
        <section class="max-w-6xl mx-auto px-6 pb-16 grid md:grid-cols-4 gap-6">
            {SERVICES
                .iter()
                .map(|(icon, title, count)| {
                    view! {
                        <div class="p-6 rounded-3xl" style=format!("background-color: {}", t.surface)>
                            <Icon icon=*icon class="w-8 h-8 mb-4" style=format!("color: {}", t.accent) />
                            <div class="text-3xl font-bold">{*count}</div>
                            <div style=format!("color: {}", t.muted)>{*title}</div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
        <section class="max-w-6xl mx-auto px-6 pb-20">
            <h2 class="text-3xl font-bold mb-8">"Selected Work"</h2>
            {PROJECTS
                .iter()
                .map(|(name, category, year)| {
                    view! {
                        <div
                            class="flex items-center justify-between py-6 border-b text-2xl"
                            style=format!("border-color: {}", t.border)
                        >
                            <span class="font-semibold">{*name}</span>
                            <span class="text-base" style=format!("color: {}", t.muted)>
                                {format!("{category} / {year}")}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(38), "$38");
        assert_eq!(format_price(449), "$449");
        assert_eq!(format_price(2499), "$2,499");
        assert_eq!(format_price(1234567), "$1,234,567");
    }
}
