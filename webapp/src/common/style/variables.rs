// design tokens
//
// the dark palette is the default; <html data-template="light"> swaps the
// color tokens only, spacing and type stay the same
pub const CSS_VARIABLES: &str = r#"
:root,
[data-template="dark"] {
  /* Palette */
  --paper: #ECE6E1;
  --paper-muted: #E6E4DC;
  --ink: #3B3935;
  --ink-deep: #2A2825;
  --kraft: #8B7355;
  --kraft-light: #9D8264;
  --clay: #E0A888;
  --stone: #77736B;
  --danger: #DC2626;

  /* Semantic roles */
  --background: var(--ink-deep);
  --surface: var(--ink);
  --surface-raised: #45423D;
  --text-primary: #FFFFFF;
  --text-secondary: var(--paper-muted);
  --text-muted: #B5AFA6;
  --primary: var(--kraft);
  --primary-hover: var(--kraft-light);
  --border: var(--stone);
  --overlay: rgba(0, 0, 0, 0.85);
  --skeleton-base: #45423D;
  --skeleton-shine: #55514B;

  /* Typography */
  --font-display: 'Maname', Georgia, serif;
  --font-body: 'DM Sans', system-ui, -apple-system, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;
  --text-2xl: 2.5rem;
  --text-3xl: 3.75rem;

  /* Spacing */
  --space-1: 0.25rem;
  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-6: 1.5rem;
  --space-8: 2rem;
  --space-12: 3rem;
  --space-16: 4rem;
  --space-24: 6rem;

  /* Layout */
  --content-width: 1280px;
  --header-height: 72px;
  --radius-sm: 6px;
  --radius-md: 10px;
  --radius-lg: 16px;
  --shadow-md: 0 4px 12px rgba(0, 0, 0, 0.25);
  --shadow-lg: 0 16px 40px rgba(0, 0, 0, 0.35);

  /* Motion */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);
}

[data-template="light"] {
  --background: var(--paper);
  --surface: #FFFFFF;
  --surface-raised: #F6F2EE;
  --text-primary: var(--ink-deep);
  --text-secondary: var(--ink);
  --text-muted: #6B665E;
  --border: #D6CFC7;
  --overlay: rgba(42, 40, 37, 0.8);
  --skeleton-base: #E8E2DC;
  --skeleton-shine: #F4F0EC;
}
"#;
