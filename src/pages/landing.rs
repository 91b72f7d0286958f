use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::faq::FaqList;
use crate::components::nav::Nav;
use crate::components::reveal::FadeIn;
use crate::components::waitlist::{EmailForm, WaitlistProvider};
use crate::content::{
    anchor_href, BRAND, COMPARISON, COPYRIGHT, FAQS, FAQ_ANCHOR, FEATURES, FEATURES_ANCHOR,
    LAUNCH_BADGE, PLANS, PORTAL_URL, PREVIEW_CARDS, PRICING_ANCHOR, PROPOSAL_NOTES,
    SOCIAL_LINKS, STATS, STEPS, TESTIMONIALS, TRIAL_NOTE, WAITLIST_ANCHOR,
};

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    #[prop_or_default]
    label: Option<&'static str>,
    title: &'static str,
    #[prop_or_default]
    subtitle: Option<&'static str>,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <FadeIn class={classes!("section-header")}>
            if let Some(label) = props.label {
                <p class="section-label">{label}</p>
            }
            <h2>{props.title}</h2>
            if let Some(subtitle) = props.subtitle {
                <p class="section-subtitle">{subtitle}</p>
            }
        </FadeIn>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-glow"></div>
            <FadeIn>
                <div class="launch-badge">
                    <span class="badge-dot"></span>
                    <span>{LAUNCH_BADGE}</span>
                </div>
            </FadeIn>
            <FadeIn delay={0.1}>
                <h1>
                    {"Stop chasing clients"}<br />
                    <span class="accent">{"over email."}</span>
                </h1>
            </FadeIn>
            <FadeIn delay={0.2}>
                <p class="hero-subtitle">
                    {"Give every client a branded portal where they can see project status, approve proposals, and pay invoices. AI writes your proposals in 10 seconds."}
                </p>
            </FadeIn>
            <FadeIn delay={0.3} id={WAITLIST_ANCHOR} class={classes!("hero-waitlist")}>
                <EmailForm />
                <p class="trial-note">{TRIAL_NOTE}</p>
            </FadeIn>
            <FadeIn delay={0.4}>
                <div class="portal-preview">
                    <div class="preview-bar">
                        <div class="preview-dots">
                            { for (0..3).map(|i| html! { <div key={i} class="preview-dot"></div> }) }
                        </div>
                        <div class="preview-url"><span>{PORTAL_URL}</span></div>
                    </div>
                    <div class="preview-body">
                        <div class="preview-welcome">
                            <div class="preview-muted">{"Welcome back"}</div>
                            <div class="preview-greeting">{"Hi Sarah 👋"}</div>
                        </div>
                        { for PREVIEW_CARDS.iter().map(|card| html! {
                            <div key={card.label} class="preview-card">
                                <div class="preview-card-label">{card.label}</div>
                                <div class="preview-card-status" style={format!("color: {};", card.color)}>
                                    {card.status}
                                </div>
                                if card.progress > 0 {
                                    <div class="progress-track">
                                        <div
                                            class="progress-fill"
                                            style={format!("width: {}%; background: {};", card.progress, card.color)}
                                        ></div>
                                    </div>
                                }
                            </div>
                        }) }
                    </div>
                </div>
            </FadeIn>
        </section>
    }
}

#[function_component(Stats)]
fn stats() -> Html {
    html! {
        <section class="section stats">
            <FadeIn>
                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div key={stat.label}>
                            <div class="stat-value">
                                <Counter target={stat.target} prefix={stat.prefix} suffix={stat.suffix} />
                                { stat.unit.unwrap_or_default() }
                            </div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
            </FadeIn>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section id={FEATURES_ANCHOR} class="section">
            <SectionHeader label="Features" title="Everything your freelance business needs. Nothing it doesn't." />
            <div class="features-grid">
                { for FEATURES.iter().enumerate().map(|(i, f)| html! {
                    <FadeIn key={f.title} delay={i as f64 * 0.08}>
                        <div class="feature-card">
                            <div class="feature-card-top">
                                <span class="feature-icon">{f.icon}</span>
                                <span class="feature-tag">{f.tag}</span>
                            </div>
                            <h3>{f.title}</h3>
                            <p>{f.desc}</p>
                        </div>
                    </FadeIn>
                }) }
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <section class="section">
            <SectionHeader label="How it works" title="Up and running in 5 minutes." />
            <div class="steps-grid">
                { for STEPS.iter().enumerate().map(|(i, step)| html! {
                    <FadeIn key={step.num} delay={i as f64 * 0.12}>
                        <div class="step">
                            <div class="step-num">{step.num}</div>
                            <h3>{step.title}</h3>
                            <p>{step.desc}</p>
                        </div>
                    </FadeIn>
                }) }
            </div>
        </section>
    }
}

#[function_component(ProposalDemo)]
fn proposal_demo() -> Html {
    html! {
        <section class="section">
            <SectionHeader label="The Magic" title="From messy notes to polished proposal." />
            <FadeIn delay={0.1}>
                <div class="proposal-demo">
                    <div class="proposal-notes">
                        <div class="proposal-caption">{"You paste this"}</div>
                        <p>{format!("“{}”", PROPOSAL_NOTES)}</p>
                    </div>
                    <div class="proposal-arrow"><span>{"→"}</span></div>
                    <div class="proposal-output">
                        <div class="proposal-caption accent">{"AI generates this ✦"}</div>
                        <div class="proposal-body">
                            <strong>{"Photography Portfolio Website"}</strong><br />
                            <span class="proposal-meta">{"Prepared for Sarah · 5 pages · 3-week delivery"}</span><br /><br />
                            <span class="proposal-heading">{"SCOPE"}</span><br />
                            {"Gallery with lightbox · About · Pricing · Contact form · Mobile-optimized"}<br /><br />
                            <span class="proposal-heading">{"INVESTMENT"}</span><br />
                            <strong class="proposal-price">{"$2,500"}</strong>
                            <span class="proposal-meta">{" · 50% upfront"}</span>
                        </div>
                    </div>
                </div>
            </FadeIn>
            <FadeIn delay={0.2}>
                <p class="proposal-tagline">{"10 seconds. Not 2 hours."}</p>
            </FadeIn>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="section">
            <SectionHeader label="Early Users" title="Freelancers are loving it." />
            <div class="testimonials-grid">
                { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                    <FadeIn key={t.name} delay={i as f64 * 0.1}>
                        <div class="testimonial">
                            <p class="testimonial-text">{format!("“{}”", t.text)}</p>
                            <div class="testimonial-author">
                                <div class="avatar">{t.avatar}</div>
                                <div>
                                    <div class="author-name">{t.name}</div>
                                    <div class="author-role">{t.role}</div>
                                </div>
                            </div>
                        </div>
                    </FadeIn>
                }) }
            </div>
        </section>
    }
}

#[function_component(Pricing)]
fn pricing() -> Html {
    html! {
        <section id={PRICING_ANCHOR} class="section">
            <SectionHeader
                label="Pricing"
                title="Simple pricing. No surprises."
                subtitle="Pay less than a single client lunch. Get your whole business organized."
            />
            <div class="plans-grid">
                { for PLANS.iter().enumerate().map(|(i, plan)| html! {
                    <FadeIn key={plan.name} delay={i as f64 * 0.1}>
                        <div class={classes!("plan", plan.popular.then(|| "popular"))}>
                            if plan.popular {
                                <div class="popular-badge">{"MOST POPULAR"}</div>
                            }
                            <h3>{plan.name}</h3>
                            <p class="plan-desc">{plan.desc}</p>
                            <div class="plan-price">
                                <span class="price">{format!("${}", plan.price)}</span>
                                <span class="per">{"/month"}</span>
                            </div>
                            { for plan.features.iter().map(|f| html! {
                                <div key={*f} class="plan-feature">
                                    <span class="check">{"✓"}</span>
                                    <span>{*f}</span>
                                </div>
                            }) }
                            <a href={anchor_href(WAITLIST_ANCHOR)} class="plan-cta">{"Join the waitlist"}</a>
                        </div>
                    </FadeIn>
                }) }
            </div>
        </section>
    }
}

#[function_component(Comparison)]
fn comparison() -> Html {
    let last = COMPARISON.len().saturating_sub(1);
    html! {
        <section class="section narrow">
            <SectionHeader title="Why freelancers switch to Skopio" />
            <FadeIn delay={0.1}>
                <div class="comparison">
                    { for COMPARISON.iter().enumerate().map(|(i, row)| html! {
                        <div key={row.label} class={classes!("comparison-row", (i < last).then(|| "divided"))}>
                            <span class="row-label">{row.label}</span>
                            <span class="row-us">{row.us}</span>
                            <span class="row-them">{row.them}</span>
                        </div>
                    }) }
                </div>
                <div class="comparison-legend">
                    <span></span>
                    <span class="legend-us">{BRAND}</span>
                    <span class="legend-them">{"Others"}</span>
                </div>
            </FadeIn>
        </section>
    }
}

#[function_component(FaqSection)]
fn faq_section() -> Html {
    html! {
        <section id={FAQ_ANCHOR} class="section faq-section">
            <SectionHeader label="FAQ" title="Questions? Answered." />
            <FaqList items={FAQS} />
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    html! {
        <section class="section final-cta">
            <FadeIn>
                <div class="final-cta-card">
                    <h2>
                        {"Ready to look more professional"}<br />
                        <span class="accent">{"without more work?"}</span>
                    </h2>
                    <p>{"Join the waitlist. Be the first to try Skopio when we launch in March 2026."}</p>
                    <div class="final-cta-form">
                        <EmailForm />
                    </div>
                </div>
            </FadeIn>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="brand small">
                    <div class="brand-mark">{"S"}</div>
                    <span class="brand-name">{BRAND}</span>
                </div>
                <div class="footer-links">
                    { for SOCIAL_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href} target="_blank" rel="noopener noreferrer">{link.label}</a>
                    }) }
                </div>
                <p class="copyright">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <WaitlistProvider>
            <div class="landing-page">
                <div class="grain"></div>
                <Nav />
                <Hero />
                <div class="glow-line"></div>
                <Stats />
                <div class="glow-line"></div>
                <Features />
                <div class="glow-line"></div>
                <HowItWorks />
                <div class="glow-line"></div>
                <ProposalDemo />
                <div class="glow-line"></div>
                <Testimonials />
                <div class="glow-line"></div>
                <Pricing />
                <div class="glow-line"></div>
                <Comparison />
                <div class="glow-line"></div>
                <FaqSection />
                <div class="glow-line"></div>
                <FinalCta />
                <Footer />
            </div>
            <style>{LANDING_CSS}</style>
        </WaitlistProvider>
    }
}

const LANDING_CSS: &str = r#"
    * { box-sizing: border-box; margin: 0; padding: 0; }
    html { scroll-behavior: smooth; }
    body {
        background: #08080c;
        color: #e8e4df;
        font-family: 'DM Sans', -apple-system, BlinkMacSystemFont, sans-serif;
        -webkit-font-smoothing: antialiased;
    }
    a { color: inherit; text-decoration: none; }

    .grain {
        position: fixed;
        inset: 0;
        pointer-events: none;
        opacity: 0.025;
        z-index: 9999;
        background-image: url("data:image/svg+xml,%3Csvg viewBox='0 0 256 256' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E");
    }

    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        padding: 0 24px;
        background: transparent;
        border-bottom: 1px solid transparent;
        transition: all 0.3s;
    }
    .top-nav.scrolled {
        background: rgba(8, 8, 12, 0.85);
        backdrop-filter: blur(20px);
        border-bottom: 1px solid rgba(255, 255, 255, 0.04);
    }
    .nav-content {
        max-width: 1120px;
        margin: 0 auto;
        height: 64px;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .brand { display: flex; align-items: center; gap: 10px; }
    .brand-mark {
        width: 32px;
        height: 32px;
        border-radius: 8px;
        background: linear-gradient(135deg, #c8956c, #a57650);
        color: #08080c;
        font-weight: 700;
        font-size: 14px;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .brand-name {
        font-family: 'Playfair Display', serif;
        font-weight: 600;
        font-size: 18px;
        letter-spacing: -0.02em;
    }
    .brand.small .brand-mark { width: 24px; height: 24px; border-radius: 6px; font-size: 10px; }
    .brand.small .brand-name { font-size: 14px; color: rgba(232, 228, 223, 0.35); }
    .nav-right { display: flex; align-items: center; gap: 32px; }
    .nav-link {
        color: rgba(232, 228, 223, 0.5);
        font-size: 14px;
        font-weight: 500;
        transition: color 0.3s;
    }
    .nav-link:hover { color: #e8e4df; }
    .nav-cta {
        background: linear-gradient(135deg, #c8956c, #a57650);
        color: #08080c;
        font-weight: 600;
        padding: 8px 20px;
        border-radius: 8px;
        font-size: 14px;
    }

    .hero {
        position: relative;
        text-align: center;
        max-width: 1120px;
        margin: 0 auto;
        padding: 140px 24px 80px;
    }
    .hero-glow {
        position: absolute;
        top: -200px;
        left: 50%;
        transform: translateX(-50%);
        width: 900px;
        height: 600px;
        background: radial-gradient(ellipse, #c8956c10 0%, transparent 70%);
        pointer-events: none;
    }
    .launch-badge {
        display: inline-flex;
        align-items: center;
        gap: 8px;
        background: rgba(200, 149, 108, 0.08);
        border: 1px solid rgba(200, 149, 108, 0.15);
        border-radius: 100px;
        padding: 6px 16px;
        margin-bottom: 28px;
        font-size: 13px;
        font-weight: 500;
        color: #c8956c;
    }
    .badge-dot { width: 6px; height: 6px; border-radius: 50%; background: #c8956c; }
    .hero h1 {
        font-family: 'Playfair Display', serif;
        font-size: clamp(36px, 6vw, 72px);
        font-weight: 600;
        line-height: 1.08;
        letter-spacing: -0.03em;
        max-width: 800px;
        margin: 0 auto 24px;
        color: #f5f2ee;
    }
    .accent { color: #c8956c; font-style: italic; }
    .hero-subtitle {
        font-size: clamp(16px, 2vw, 19px);
        line-height: 1.65;
        color: rgba(232, 228, 223, 0.5);
        max-width: 560px;
        margin: 0 auto 40px;
    }
    .hero-waitlist {
        display: flex;
        flex-direction: column;
        align-items: center;
        margin-bottom: 48px;
    }
    .trial-note { font-size: 13px; color: rgba(232, 228, 223, 0.25); margin-top: 12px; }

    .waitlist-form-wrapper { width: 100%; max-width: 480px; margin: 0 auto; }
    .waitlist-form { display: flex; gap: 10px; width: 100%; }
    .waitlist-input {
        flex: 1;
        background: rgba(255, 255, 255, 0.04);
        border: 1px solid rgba(255, 255, 255, 0.08);
        border-radius: 10px;
        color: #e8e4df;
        font-size: 15px;
        padding: 14px 18px;
        outline: none;
        font-family: inherit;
        transition: border-color 0.3s;
    }
    .waitlist-input:focus { border-color: rgba(200, 149, 108, 0.4); }
    .waitlist-button {
        background: linear-gradient(135deg, #c8956c, #a57650);
        color: #08080c;
        font-weight: 600;
        border: none;
        border-radius: 10px;
        padding: 14px 28px;
        font-size: 15px;
        cursor: pointer;
        font-family: inherit;
        white-space: nowrap;
        transition: all 0.3s;
    }
    .waitlist-button.loading { opacity: 0.7; cursor: default; }
    .form-hint { margin-top: 10px; font-size: 13px; color: #e07a5f; text-align: left; }
    .waitlist-confirmation {
        background: rgba(200, 149, 108, 0.08);
        border: 1px solid rgba(200, 149, 108, 0.2);
        border-radius: 12px;
        padding: 18px 24px;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 12px;
        color: #c8956c;
        font-weight: 500;
    }
    .waitlist-confirmation .check { font-size: 20px; }

    .portal-preview {
        max-width: 880px;
        margin: 0 auto;
        background: linear-gradient(135deg, rgba(255, 255, 255, 0.03), rgba(255, 255, 255, 0.01));
        border: 1px solid rgba(255, 255, 255, 0.06);
        border-radius: 16px;
        overflow: hidden;
        text-align: left;
    }
    .preview-bar {
        padding: 10px 16px;
        border-bottom: 1px solid rgba(255, 255, 255, 0.04);
        display: flex;
        align-items: center;
        gap: 8px;
    }
    .preview-dots { display: flex; gap: 5px; }
    .preview-dot { width: 10px; height: 10px; border-radius: 50%; background: rgba(255, 255, 255, 0.08); }
    .preview-url { flex: 1; display: flex; justify-content: center; }
    .preview-url span {
        background: rgba(255, 255, 255, 0.03);
        border-radius: 6px;
        padding: 4px 16px;
        font-size: 12px;
        color: rgba(232, 228, 223, 0.3);
    }
    .preview-body {
        padding: 32px 32px 28px;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 16px;
    }
    .preview-welcome { grid-column: 1 / -1; margin-bottom: 8px; }
    .preview-muted { font-size: 13px; color: rgba(232, 228, 223, 0.3); margin-bottom: 4px; }
    .preview-greeting { font-family: 'Playfair Display', serif; font-size: 22px; font-weight: 600; color: #f5f2ee; }
    .preview-card {
        background: rgba(255, 255, 255, 0.02);
        border: 1px solid rgba(255, 255, 255, 0.04);
        border-radius: 12px;
        padding: 18px;
    }
    .preview-card-label { font-size: 13px; font-weight: 600; color: #e8e4df; margin-bottom: 6px; }
    .preview-card-status { font-size: 12px; font-weight: 500; margin-bottom: 10px; }
    .progress-track { height: 4px; background: rgba(255, 255, 255, 0.04); border-radius: 4px; overflow: hidden; }
    .progress-fill { height: 100%; border-radius: 4px; }

    .glow-line { height: 1px; background: linear-gradient(90deg, transparent, #c8956c40, transparent); }

    .section { max-width: 1120px; margin: 0 auto; padding: 80px 24px; }
    .section.narrow { max-width: 800px; }
    .section.stats { padding: 64px 24px; }
    .section-header { text-align: center; margin-bottom: 56px; }
    .section-label {
        font-size: 13px;
        font-weight: 600;
        color: #c8956c;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        margin-bottom: 12px;
    }
    .section-header h2, .final-cta-card h2 {
        font-family: 'Playfair Display', serif;
        font-size: clamp(28px, 4vw, 44px);
        font-weight: 600;
        letter-spacing: -0.02em;
        color: #f5f2ee;
        max-width: 550px;
        margin: 0 auto;
    }
    .section-subtitle { font-size: 15px; color: rgba(232, 228, 223, 0.4); margin-top: 12px; }

    .stats-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px; text-align: center; }
    .stat-value {
        font-family: 'Playfair Display', serif;
        font-size: clamp(28px, 4vw, 44px);
        font-weight: 600;
        color: #c8956c;
        letter-spacing: -0.02em;
    }
    .stat-label { font-size: 14px; color: rgba(232, 228, 223, 0.4); margin-top: 6px; }

    .features-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 16px; }
    .feature-card {
        background: linear-gradient(135deg, rgba(255, 255, 255, 0.02), rgba(255, 255, 255, 0.005));
        border: 1px solid rgba(255, 255, 255, 0.04);
        border-radius: 16px;
        padding: 32px;
        transition: all 0.4s;
        height: 100%;
    }
    .feature-card:hover { border-color: rgba(200, 149, 108, 0.2); transform: translateY(-2px); }
    .feature-card-top { display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px; }
    .feature-icon { font-size: 28px; color: #c8956c; }
    .feature-tag {
        font-size: 11px;
        font-weight: 600;
        color: rgba(200, 149, 108, 0.6);
        background: rgba(200, 149, 108, 0.08);
        padding: 4px 10px;
        border-radius: 100px;
    }
    .feature-card h3, .step h3 { font-size: 17px; font-weight: 600; color: #f5f2ee; margin-bottom: 8px; }
    .feature-card p, .step p { font-size: 14px; line-height: 1.65; color: rgba(232, 228, 223, 0.45); }

    .steps-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 24px; }
    .step-num {
        font-family: 'Playfair Display', serif;
        font-size: 48px;
        font-weight: 600;
        color: rgba(200, 149, 108, 0.08);
        margin-bottom: 8px;
    }

    .proposal-demo {
        display: grid;
        grid-template-columns: 1fr 40px 1fr;
        align-items: center;
        max-width: 900px;
        margin: 0 auto;
    }
    .proposal-notes, .proposal-output { border-radius: 16px; padding: 28px; }
    .proposal-notes { background: rgba(255, 255, 255, 0.02); border: 1px solid rgba(255, 255, 255, 0.05); }
    .proposal-notes p { font-size: 14px; line-height: 1.7; color: rgba(232, 228, 223, 0.5); font-style: italic; }
    .proposal-output {
        background: linear-gradient(135deg, rgba(200, 149, 108, 0.06), rgba(200, 149, 108, 0.01));
        border: 1px solid rgba(200, 149, 108, 0.15);
    }
    .proposal-caption {
        font-size: 11px;
        font-weight: 600;
        color: rgba(232, 228, 223, 0.3);
        letter-spacing: 0.08em;
        text-transform: uppercase;
        margin-bottom: 14px;
    }
    .proposal-caption.accent { color: #c8956c; font-style: normal; }
    .proposal-arrow { display: flex; justify-content: center; font-size: 22px; color: #c8956c; }
    .proposal-body { font-size: 14px; line-height: 1.7; color: rgba(232, 228, 223, 0.65); }
    .proposal-body strong { color: #f5f2ee; }
    .proposal-meta { color: rgba(232, 228, 223, 0.4); font-size: 13px; }
    .proposal-heading { color: #c8956c; font-size: 12px; font-weight: 600; }
    .proposal-price { font-size: 18px; }
    .proposal-tagline { text-align: center; margin-top: 28px; font-size: 14px; color: rgba(232, 228, 223, 0.3); }

    .testimonials-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 16px; }
    .testimonial {
        background: linear-gradient(135deg, rgba(255, 255, 255, 0.02), transparent);
        border: 1px solid rgba(255, 255, 255, 0.04);
        border-radius: 16px;
        padding: 28px;
    }
    .testimonial-text {
        font-size: 14px;
        line-height: 1.7;
        color: rgba(232, 228, 223, 0.55);
        margin-bottom: 20px;
        font-style: italic;
    }
    .testimonial-author { display: flex; align-items: center; gap: 12px; }
    .avatar {
        width: 36px;
        height: 36px;
        border-radius: 50%;
        background: linear-gradient(135deg, #c8956c, #a57650);
        display: flex;
        align-items: center;
        justify-content: center;
        color: #08080c;
        font-weight: 700;
        font-size: 12px;
    }
    .author-name { font-size: 14px; font-weight: 600; color: #e8e4df; }
    .author-role { font-size: 12px; color: rgba(232, 228, 223, 0.35); }

    .plans-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 16px;
        max-width: 960px;
        margin: 0 auto;
    }
    .plan {
        background: linear-gradient(180deg, rgba(255, 255, 255, 0.02), rgba(255, 255, 255, 0.005));
        border: 1px solid rgba(255, 255, 255, 0.05);
        border-radius: 20px;
        padding: 36px;
        position: relative;
    }
    .plan.popular {
        background: linear-gradient(180deg, rgba(200, 149, 108, 0.06), rgba(200, 149, 108, 0.01));
        border-color: rgba(200, 149, 108, 0.3);
    }
    .popular-badge {
        position: absolute;
        top: -1px;
        left: 50%;
        transform: translateX(-50%);
        background: linear-gradient(135deg, #c8956c, #a57650);
        color: #08080c;
        font-size: 11px;
        font-weight: 700;
        padding: 4px 16px;
        border-radius: 0 0 8px 8px;
    }
    .plan h3 { font-size: 18px; font-weight: 600; color: #f5f2ee; margin-bottom: 4px; }
    .plan.popular h3 { margin-top: 12px; }
    .plan-desc { font-size: 13px; color: rgba(232, 228, 223, 0.35); margin-bottom: 20px; }
    .plan-price { display: flex; align-items: baseline; gap: 4px; margin-bottom: 24px; }
    .plan-price .price { font-family: 'Playfair Display', serif; font-size: 44px; font-weight: 600; color: #f5f2ee; }
    .plan.popular .plan-price .price { color: #c8956c; }
    .plan-price .per { font-size: 14px; color: rgba(232, 228, 223, 0.3); }
    .plan-feature { display: flex; align-items: center; gap: 10px; margin-bottom: 10px; font-size: 14px; color: rgba(232, 228, 223, 0.55); }
    .plan-feature .check { color: #c8956c; font-size: 12px; }
    .plan-cta {
        display: block;
        text-align: center;
        margin-top: 24px;
        padding: 12px 24px;
        border-radius: 10px;
        font-size: 14px;
        font-weight: 500;
        background: rgba(255, 255, 255, 0.05);
        color: #e8e4df;
        border: 1px solid rgba(255, 255, 255, 0.08);
    }
    .plan.popular .plan-cta {
        font-weight: 600;
        background: linear-gradient(135deg, #c8956c, #a57650);
        color: #08080c;
        border: none;
    }

    .comparison {
        background: rgba(255, 255, 255, 0.02);
        border: 1px solid rgba(255, 255, 255, 0.05);
        border-radius: 16px;
        overflow: hidden;
    }
    .comparison-row, .comparison-legend {
        display: grid;
        grid-template-columns: 1fr 1fr 1fr;
        align-items: center;
        font-size: 13px;
    }
    .comparison-row { padding: 14px 20px; }
    .comparison-row.divided { border-bottom: 1px solid rgba(255, 255, 255, 0.04); }
    .row-label { font-weight: 500; color: rgba(232, 228, 223, 0.4); }
    .row-us { font-weight: 600; color: #c8956c; text-align: center; }
    .row-them { color: rgba(232, 228, 223, 0.25); text-align: center; }
    .comparison-legend { padding: 8px 20px 0; font-size: 11px; }
    .legend-us { color: rgba(200, 149, 108, 0.4); text-align: center; font-weight: 600; }
    .legend-them { color: rgba(232, 228, 223, 0.15); text-align: center; }

    .faq-section { max-width: 700px; }
    .faq-section .section-header h2 { font-size: clamp(28px, 4vw, 36px); }
    .faq-item { border-bottom: 1px solid rgba(255, 255, 255, 0.05); }
    .faq-question {
        width: 100%;
        background: none;
        border: none;
        padding: 20px 0;
        display: flex;
        justify-content: space-between;
        align-items: center;
        cursor: pointer;
        text-align: left;
        font-family: inherit;
    }
    .question-text { font-size: 15px; font-weight: 500; color: #e8e4df; padding-right: 20px; }
    .toggle-icon { color: #c8956c; font-size: 18px; transition: transform 0.3s; flex-shrink: 0; }
    .faq-item.open .toggle-icon { transform: rotate(45deg); }
    .faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.4s cubic-bezier(0.16, 1, 0.3, 1); }
    .faq-item.open .faq-answer { max-height: 200px; }
    .faq-answer p { font-size: 14px; line-height: 1.7; color: rgba(232, 228, 223, 0.45); padding-bottom: 20px; }

    .final-cta { text-align: center; padding: 80px 24px 40px; }
    .final-cta-card {
        background: linear-gradient(135deg, rgba(200, 149, 108, 0.06), rgba(200, 149, 108, 0.02));
        border: 1px solid rgba(200, 149, 108, 0.1);
        border-radius: 24px;
        padding: 56px 32px;
        max-width: 700px;
        margin: 0 auto;
    }
    .final-cta-card h2 { font-size: clamp(24px, 4vw, 40px); max-width: none; margin-bottom: 16px; }
    .final-cta-card p { font-size: 15px; color: rgba(232, 228, 223, 0.45); max-width: 440px; margin: 0 auto 32px; }
    .final-cta-form { display: flex; justify-content: center; }

    .footer { max-width: 1120px; margin: 0 auto; padding: 40px 24px; border-top: 1px solid rgba(255, 255, 255, 0.04); }
    .footer-content { display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 16px; }
    .footer-links { display: flex; gap: 24px; }
    .footer-links a { font-size: 13px; color: rgba(232, 228, 223, 0.3); transition: color 0.3s; }
    .footer-links a:hover { color: #e8e4df; }
    .copyright { font-size: 12px; color: rgba(232, 228, 223, 0.2); }

    @media (max-width: 768px) {
        .nav-link { display: none; }
        .preview-body, .stats-grid { grid-template-columns: 1fr; }
        .proposal-demo { grid-template-columns: 1fr; gap: 16px; }
        .proposal-arrow { transform: rotate(90deg); }
        .waitlist-form { flex-direction: column; }
    }
"#;
