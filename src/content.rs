//! Marketing copy for the landing page. Everything here is fixed at compile time
//! and only ever mapped into markup.

pub const BRAND: &str = "Skopio";
pub const LAUNCH_BADGE: &str = "Launching March 2026 — Join the waitlist";
pub const TRIAL_NOTE: &str = "Free 14-day trial · No credit card required · Cancel anytime";
pub const PORTAL_URL: &str = "portal.skopio.co/sarah-mitchell";

// In-page anchors the nav and pricing cards link to.
pub const FEATURES_ANCHOR: &str = "features";
pub const PRICING_ANCHOR: &str = "pricing";
pub const FAQ_ANCHOR: &str = "faq";
pub const WAITLIST_ANCHOR: &str = "waitlist";

pub fn anchor_href(anchor: &str) -> String {
    format!("#{anchor}")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Features", anchor: FEATURES_ANCHOR },
    NavLink { label: "Pricing", anchor: PRICING_ANCHOR },
    NavLink { label: "FAQ", anchor: FAQ_ANCHOR },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewCard {
    pub label: &'static str,
    pub status: &'static str,
    pub progress: u8,
    pub color: &'static str,
}

pub const PREVIEW_CARDS: &[PreviewCard] = &[
    PreviewCard { label: "Website Redesign", status: "In Progress", progress: 65, color: "#c8956c" },
    PreviewCard { label: "Brand Identity", status: "In Review", progress: 90, color: "#8b7cf6" },
    PreviewCard { label: "Invoice #002", status: "$1,500 Pending", progress: 0, color: "#e8b44f" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub target: u64,
    pub prefix: &'static str,
    pub suffix: &'static str,
    /// Rendered after the animated number, outside the counter.
    pub unit: Option<&'static str>,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { target: 2, prefix: "", suffix: "+ hrs", unit: None, label: "Saved per proposal with AI" },
    Stat { target: 10, prefix: "", suffix: "", unit: Some(" sec"), label: "To generate a professional proposal" },
    Stat { target: 83, prefix: "", suffix: "%", unit: None, label: "Of freelancers still use email + chaos" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub tag: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "◐",
        title: "Branded Client Portal",
        desc: "Your clients get their own login. They see project status, files, invoices, and messages — all in one clean dashboard with your brand on it.",
        tag: "No more email chaos",
    },
    Feature {
        icon: "✦",
        title: "AI Proposal Generator",
        desc: "Paste messy client notes. Get a professional proposal with scope, timeline, and pricing in 10 seconds. Review, tweak, send.",
        tag: "Save 2+ hours per proposal",
    },
    Feature {
        icon: "◈",
        title: "Simple Invoicing",
        desc: "Create invoices, send them through the portal, track what's paid and what's overdue. Your client can pay directly with one click.",
        tag: "Get paid faster",
    },
    Feature {
        icon: "◉",
        title: "File Sharing Hub",
        desc: "No more digging through email for that logo file from 3 weeks ago. Everything lives in the portal, organized by project.",
        tag: "Everything in one place",
    },
    Feature {
        icon: "▣",
        title: "Project Tracker",
        desc: "Your client sees exactly where their project stands. No more 'just checking in' emails. They check the portal instead.",
        tag: "Kill status update emails",
    },
    Feature {
        icon: "◎",
        title: "Client Approvals",
        desc: "Need sign-off on a design? Send it through the portal. Client clicks Approve — you have a timestamped record. Done.",
        tag: "No more WhatsApp approvals",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const STEPS: &[Step] = &[
    Step { num: "01", title: "Sign up in 60 seconds", desc: "Create your account, add your brand colors and logo. Your portal is live immediately." },
    Step { num: "02", title: "Add your first client", desc: "Enter their name and email. They get a branded login link to their personal portal." },
    Step { num: "03", title: "Generate an AI proposal", desc: "Paste your notes from the client call. AI creates a professional proposal instantly." },
    Step { num: "04", title: "Get paid & deliver", desc: "Client approves the proposal, you send invoices, share files, and track progress — all in one place." },
];

pub const PROPOSAL_NOTES: &str = "sarah needs a website for her photography business, 5 pages, wants gallery with lightbox, contact form, about page, pricing page, budget is $2500, needs it in 3 weeks, must work on mobile";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Alex R.",
        role: "Freelance Web Designer",
        text: "I was managing 8 clients across Gmail, WhatsApp, Google Drive, and PayPal. Now everything is in one link. My clients think I'm way more professional than I actually am.",
        avatar: "AR",
    },
    Testimonial {
        name: "Priya K.",
        role: "Brand Consultant",
        text: "The AI proposal generator alone is worth it. I used to spend Sunday nights writing proposals. Now I paste my notes and it's done in seconds.",
        avatar: "PK",
    },
    Testimonial {
        name: "Marcus J.",
        role: "Freelance Photographer",
        text: "My clients used to email me asking for files I'd already sent. Now I just say check your portal. It's saved me hours every week.",
        avatar: "MJ",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Do my clients need to download an app?",
        answer: "No. Skopio is a web app. Your client clicks a link, logs in from any browser on any device — phone, tablet, laptop. Nothing to install.",
    },
    Faq {
        question: "How is this different from Dubsado or HoneyBook?",
        answer: "Those tools are built for established businesses with 50+ features you'll never use, starting at $20-40/month and getting expensive fast. Skopio does 5 things perfectly for solo freelancers at a fraction of the price. Plus, none of them have AI-powered proposal generation built in.",
    },
    Faq {
        question: "Is my data secure?",
        answer: "Yes. Skopio runs on Google Cloud infrastructure (same security as Gmail and Google Drive). All data is encrypted at rest and in transit. Payments are processed through Stripe — we never see or store credit card numbers.",
    },
    Faq {
        question: "Can I try it before paying?",
        answer: "Absolutely. 14-day free trial, no credit card required. If it doesn't save you time, don't pay.",
    },
    Faq {
        question: "What if I only have 2-3 clients?",
        answer: "That's exactly who we built this for. Our Starter plan covers up to 5 clients for $19/month. You don't need 50 clients to benefit — even one client portal saves you hours of back-and-forth emails.",
    },
    Faq {
        question: "Can I customize the portal with my brand?",
        answer: "Yes. Add your logo, brand colors, and custom domain. Your clients see YOUR brand, not ours.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub desc: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "19",
        desc: "For freelancers just getting started",
        features: &["Up to 5 clients", "AI proposal generator", "Invoicing & payments", "File sharing", "Project tracker", "Your brand colors & logo"],
        popular: false,
    },
    Plan {
        name: "Pro",
        price: "39",
        desc: "For established freelancers",
        features: &["Up to 25 clients", "Everything in Starter", "Custom domain portal", "Client approvals", "Priority support", "Advanced AI templates"],
        popular: true,
    },
    Plan {
        name: "Studio",
        price: "79",
        desc: "For small agencies & teams",
        features: &["Unlimited clients", "Everything in Pro", "Team member access", "White-label portal", "API access", "Dedicated onboarding"],
        popular: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub us: &'static str,
    pub them: &'static str,
}

pub const COMPARISON: &[ComparisonRow] = &[
    ComparisonRow { label: "Price", us: "From $19/mo", them: "$40–$299/mo" },
    ComparisonRow { label: "AI proposals", us: "Built in ✦", them: "Not available or $69/mo add-on" },
    ComparisonRow { label: "Setup time", us: "5 minutes", them: "Hours to configure" },
    ComparisonRow { label: "Features", us: "5 essential tools", them: "50+ bloated features" },
    ComparisonRow { label: "Built for", us: "Solo freelancers", them: "Agencies & enterprises" },
    ComparisonRow { label: "Learning curve", us: "None", them: "Watch tutorial videos" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Twitter", href: "https://x.com/skopioapp" },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com/company/skopio" },
];

pub const COPYRIGHT: &str = "© 2026 Skopio. Built for freelancers who value simplicity.";

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION_ANCHORS: [&str; 4] = [FEATURES_ANCHOR, PRICING_ANCHOR, FAQ_ANCHOR, WAITLIST_ANCHOR];

    #[test]
    fn exactly_one_plan_is_highlighted() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
        assert_eq!(PLANS.iter().find(|p| p.popular).map(|p| p.name), Some("Pro"));
    }

    #[test]
    fn nav_links_point_at_known_sections() {
        for link in NAV_LINKS {
            assert!(SECTION_ANCHORS.contains(&link.anchor), "{} has no section", link.anchor);
        }
    }

    #[test]
    fn anchors_are_plain_ids() {
        assert_eq!(SECTION_ANCHORS, ["features", "pricing", "faq", "waitlist"]);
        for anchor in SECTION_ANCHORS {
            assert!(anchor.chars().all(|c| c.is_ascii_lowercase()), "{anchor}");
        }
        assert_eq!(anchor_href(WAITLIST_ANCHOR), "#waitlist");
    }

    #[test]
    fn social_links_leave_the_site() {
        assert_eq!(SOCIAL_LINKS.len(), 2);
        assert!(SOCIAL_LINKS.iter().all(|l| l.href.starts_with("https://")));
    }

    #[test]
    fn every_plan_lists_six_features() {
        assert!(PLANS.iter().all(|p| p.features.len() == 6));
    }

    #[test]
    fn preview_progress_is_a_percentage() {
        assert!(PREVIEW_CARDS.iter().all(|c| c.progress <= 100));
    }
}
