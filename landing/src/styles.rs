// Landing page stylesheet, injected once by `App`.

pub const LANDING_CSS: &str = r#"
:root {
    --navy-900: #0b1f4d;
    --navy-800: #12307a;
    --indigo-900: #1e1b5e;
    --blue-600: #2563eb;
    --blue-100: #dbeafe;
    --cyan-300: #67e8f9;
    --gray-50: #f9fafb;
    --gray-600: #4b5563;
    --gray-900: #111827;
    --radius: 16px;
    --shadow: 0 10px 30px rgba(17, 24, 39, 0.12);
    --font: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
}

* { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
body { font-family: var(--font); color: var(--gray-900); background: #fff; overflow-x: hidden; }
a { color: inherit; text-decoration: none; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }

/* Buttons */
.btn { display: inline-block; padding: 14px 32px; border-radius: 10px; font-weight: 600; font-size: 1.05rem; border: 2px solid transparent; cursor: pointer; transition: transform .3s, box-shadow .3s, background .3s, color .3s; }
.btn:hover { transform: translateY(-3px); box-shadow: 0 16px 32px rgba(0, 0, 0, .18); }
.btn-primary { background: var(--blue-600); color: #fff; }
.btn-light { background: #fff; color: var(--navy-900); }
.btn-outline { border-color: #fff; color: #fff; }
.btn-outline:hover { background: #fff; color: var(--navy-900); }
.btn-dark { background: var(--gray-900); color: #fff; }
.btn-dark:hover { background: var(--blue-600); }
.btn-block { display: block; width: 100%; text-align: center; }

/* Nav */
.nav { position: fixed; top: 0; left: 0; right: 0; z-index: 100; background: rgba(11, 31, 77, .85); backdrop-filter: blur(12px); }
.nav-inner { display: flex; align-items: center; justify-content: space-between; height: 64px; }
.nav-brand { font-size: 1.6rem; font-weight: 800; letter-spacing: .08em; color: #fff; }
.nav-links { display: flex; align-items: center; gap: 28px; }
.nav-link { color: var(--blue-100); font-weight: 500; }
.nav-link:hover { color: #fff; }
.nav-cta { padding: 8px 20px; font-size: .95rem; }
.nav-toggle { display: none; background: none; border: 0; color: #fff; font-size: 1.5rem; cursor: pointer; }
.nav-drawer { display: none; }

/* Hero */
.hero { position: relative; min-height: 100vh; display: flex; align-items: center; justify-content: center; overflow: hidden; text-align: center; }
.hero-bg { position: absolute; inset: 0 0 -50% 0; background: linear-gradient(135deg, var(--navy-900), var(--navy-800) 50%, var(--indigo-900)); will-change: transform; }
.hero-glow { position: absolute; inset: 0; opacity: .1; pointer-events: none; }
.hero-glow-a, .hero-glow-b { position: absolute; border-radius: 50%; filter: blur(64px); animation: pulse 4s ease-in-out infinite; }
.hero-glow-a { top: 25%; left: 25%; width: 256px; height: 256px; background: #fff; }
.hero-glow-b { bottom: 25%; right: 25%; width: 384px; height: 384px; background: #93c5fd; animation-delay: 1s; }
.hero-content { position: relative; z-index: 1; }
.hero-title { font-size: clamp(2.8rem, 7vw, 4.6rem); font-weight: 800; line-height: 1.1; color: #fff; margin-bottom: 24px; }
.hero-title-accent { background: linear-gradient(90deg, #60a5fa, var(--cyan-300)); -webkit-background-clip: text; background-clip: text; color: transparent; }
.hero-subtitle { font-size: clamp(1.15rem, 2vw, 1.5rem); line-height: 1.6; color: var(--blue-100); max-width: 56rem; margin: 0 auto 32px; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; }
.scroll-indicator { position: absolute; bottom: -120px; left: 50%; width: 24px; height: 40px; margin-left: -12px; border: 2px solid #fff; border-radius: 12px; animation: bounce 2s infinite; }
.scroll-indicator-dot { width: 4px; height: 12px; margin: 8px auto 0; background: #fff; border-radius: 2px; }

/* Horizontal scroll */
.hscroll { position: relative; height: 100vh; }
.hscroll-pin { position: sticky; top: 0; height: 100vh; overflow: hidden; }
.hscroll-strip { display: flex; height: 100%; will-change: transform; }
.panel { position: relative; flex: 0 0 100vw; width: 100vw; height: 100%; display: flex; align-items: center; justify-content: center; color: #fff; }
.panel--red { background: linear-gradient(135deg, #dc2626, #991b1b); }
.panel--green { background: linear-gradient(135deg, #16a34a, #166534); }
.panel--purple { background: linear-gradient(135deg, #9333ea, #6b21a8); }
.panel--orange { background: linear-gradient(135deg, #ea580c, #9a3412); }
.panel--teal { background: linear-gradient(135deg, #0d9488, #115e59); }
.panel-rings { position: absolute; inset: 0; opacity: .1; pointer-events: none; }
.ring { position: absolute; border: 1px solid #fff; border-radius: 50%; }
.ring-a { top: 40px; left: 40px; width: 128px; height: 128px; }
.ring-b { bottom: 80px; right: 80px; width: 192px; height: 192px; }
.ring-c { top: 50%; left: 25%; width: 96px; height: 96px; }
.panel-content { position: relative; z-index: 1; max-width: 1150px; padding: 0 64px; display: grid; grid-template-columns: 1fr 1fr; gap: 48px; align-items: center; }
.panel-copy > * + * { margin-top: 24px; }
.panel-icon { font-size: 3.75rem; }
.panel-title { font-size: clamp(2.5rem, 5vw, 3.75rem); font-weight: 800; line-height: 1.1; }
.panel-subtitle { font-size: clamp(1.4rem, 2.4vw, 1.9rem); font-weight: 500; color: rgba(255, 255, 255, .8); }
.panel-description { font-size: 1.3rem; line-height: 1.6; color: rgba(255, 255, 255, .9); }
.panel-features h4 { font-size: 1.5rem; font-weight: 600; margin-bottom: 20px; }
.panel-feature { display: flex; align-items: center; gap: 16px; padding: 16px; margin-bottom: 12px; border-radius: 10px; background: rgba(255, 255, 255, .1); backdrop-filter: blur(4px); font-size: 1.1rem; font-weight: 500; transition: background .3s; }
.panel-feature:hover { background: rgba(255, 255, 255, .2); }
.panel-feature-dot { width: 12px; height: 12px; border-radius: 50%; background: #fff; flex: none; }
.panel-number { position: absolute; top: 32px; right: 32px; font-size: 1.5rem; font-weight: 700; color: rgba(255, 255, 255, .5); }
.hscroll-progress { position: absolute; bottom: 32px; left: 50%; transform: translateX(-50%); display: flex; gap: 8px; z-index: 2; }
.progress-dot { width: 12px; height: 12px; border-radius: 50%; background: rgba(255, 255, 255, .3); transition: background .3s, transform .3s; }
.progress-dot.active { background: #fff; transform: scale(1.3); }

/* Shared section header */
.section-header { text-align: center; margin-bottom: 64px; }
.section-title { font-size: clamp(2.2rem, 4vw, 3rem); font-weight: 800; margin-bottom: 24px; }
.section-lead { font-size: 1.25rem; line-height: 1.6; color: var(--gray-600); max-width: 48rem; margin: 0 auto; }
.section-title.light { color: #fff; }
.section-lead.light { color: var(--blue-100); }

/* Services */
.services { padding: 96px 0; background: var(--gray-50); }
.services-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px; }
.service-card { position: relative; padding: 32px; border-radius: var(--radius); background: #fff; box-shadow: var(--shadow); transition: box-shadow .5s; }
.service-card:hover { box-shadow: 0 24px 48px rgba(17, 24, 39, .18); }
.service-card--blue { border-top: 4px solid #3b82f6; }
.service-card--green { border-top: 4px solid #22c55e; }
.service-card--purple { border-top: 4px solid #a855f7; }
.service-card--orange { border-top: 4px solid #f97316; }
.service-card--red { border-top: 4px solid #ef4444; }
.service-card--teal { border-top: 4px solid #14b8a6; }
.service-icon { font-size: 3rem; margin-bottom: 24px; }
.service-title { font-size: 1.5rem; font-weight: 700; margin-bottom: 16px; }
.service-card:hover .service-title { color: var(--blue-600); }
.service-description { color: var(--gray-600); line-height: 1.6; margin-bottom: 24px; }
.service-features { list-style: none; margin-bottom: 24px; }
.service-features li { position: relative; padding-left: 20px; margin-bottom: 8px; font-size: .9rem; color: #6b7280; }
.service-features li::before { content: ""; position: absolute; left: 0; top: 6px; width: 8px; height: 8px; border-radius: 50%; background: #3b82f6; }
.service-arrow { position: absolute; top: 16px; right: 16px; color: var(--blue-600); font-size: 1.5rem; opacity: 0; transition: opacity .3s; }
.service-card:hover .service-arrow { opacity: 1; }

/* Stats */
.stats { position: relative; padding: 96px 0; overflow: hidden; color: #fff; }
.stats-bg { position: absolute; inset: 0; background: linear-gradient(135deg, var(--navy-900), var(--navy-800) 50%, var(--indigo-900)); transform-origin: center; }
.stats-pattern { position: absolute; inset: 0; opacity: .1; background-image: radial-gradient(circle at 25px 25px, #fff 2px, transparent 0); background-size: 50px 50px; }
.stats-inner { position: relative; z-index: 1; }
.stats-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 32px; }
.stat-card { text-align: center; }
.stat-card-inner { padding: 32px; border-radius: var(--radius); background: rgba(255, 255, 255, .1); backdrop-filter: blur(4px); transition: background .5s, transform .5s; }
.stat-card-inner:hover { background: rgba(255, 255, 255, .2); transform: translateY(-8px) scale(1.05); }
.stat-icon { font-size: 3rem; margin-bottom: 24px; }
.stat-counter { display: block; font-size: clamp(2.2rem, 4vw, 3rem); font-weight: 800; margin-bottom: 16px; font-variant-numeric: tabular-nums; }
.stat-label { font-size: 1.1rem; font-weight: 500; color: var(--blue-100); }
.stat-rule { width: 64px; height: 4px; margin: 24px auto 0; border-radius: 2px; background: linear-gradient(90deg, #60a5fa, var(--cyan-300)); transition: width .3s; }
.stat-card:hover .stat-rule { width: 96px; }
.stats-cta { text-align: center; margin-top: 64px; }
.stats-cta p { color: var(--blue-100); font-size: 1.1rem; margin-bottom: 24px; }

/* Contact */
.contact { padding: 96px 0 0; background: var(--gray-50); }
.contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 64px; }
.contact-form-card { padding: 32px; border-radius: var(--radius); background: #fff; box-shadow: var(--shadow); }
.contact-form-card h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 24px; }
.form-field { margin-bottom: 24px; }
.form-field label { display: block; font-size: .9rem; font-weight: 500; color: #374151; margin-bottom: 8px; }
.form-field input, .form-field textarea { width: 100%; padding: 12px 16px; border: 1px solid #d1d5db; border-radius: 10px; font: inherit; transition: border-color .2s, box-shadow .2s; }
.form-field input:focus, .form-field textarea:focus { outline: none; border-color: transparent; box-shadow: 0 0 0 2px #3b82f6; }
.form-field textarea { resize: vertical; }
.form-error { margin-bottom: 16px; color: #b91c1c; font-weight: 500; }
.contact-info-column > * + * { margin-top: 32px; }
.contact-info { display: flex; gap: 16px; padding: 24px; border-radius: var(--radius); background: #fff; box-shadow: var(--shadow); }
.contact-info-icon { font-size: 1.9rem; }
.contact-info h4 { font-size: 1.25rem; font-weight: 700; margin-bottom: 8px; }
.contact-info p { color: var(--gray-600); line-height: 1.6; }
.contact-social { display: block; background: var(--blue-600); color: #fff; }
.social-links { display: flex; gap: 16px; }
.social-link { width: 40px; height: 40px; display: flex; align-items: center; justify-content: center; border-radius: 50%; background: rgba(255, 255, 255, .2); transition: background .2s; }
.social-link:hover { background: rgba(255, 255, 255, .3); }

/* Footer */
.footer { margin-top: 80px; padding: 40px 0; border-top: 1px solid #e5e7eb; }
.footer-inner { display: flex; justify-content: space-between; align-items: center; }
.footer-brand { font-size: 1.5rem; font-weight: 800; }
.footer-copy { text-align: right; color: var(--gray-600); }
.footer-tagline { font-size: .9rem; margin-top: 4px; }

@keyframes pulse { 50% { opacity: .5; } }
@keyframes bounce { 0%, 100% { transform: translateY(-25%); } 50% { transform: none; } }

@media (max-width: 1024px) {
    .services-grid { grid-template-columns: repeat(2, 1fr); }
    .stats-grid { grid-template-columns: repeat(2, 1fr); }
    .contact-grid, .panel-content { grid-template-columns: 1fr; }
    .panel-content { padding: 0 32px; gap: 24px; }
}

@media (max-width: 720px) {
    .nav-links { display: none; }
    .nav-toggle { display: block; }
    .nav-drawer.open { display: flex; flex-direction: column; padding: 8px 24px 16px; }
    .nav-drawer-link { padding: 12px 0; color: #fff; border-bottom: 1px solid rgba(255, 255, 255, .1); }
    .services-grid, .stats-grid { grid-template-columns: 1fr; }
    .panel-features { display: none; }
    .footer-inner { flex-direction: column; gap: 16px; text-align: center; }
    .footer-copy { text-align: center; }
}
"#;
