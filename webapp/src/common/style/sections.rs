pub const SECTION_STYLES: &str = r#"
/* Shared section chrome */
.section {
  padding: var(--space-24) 0;
  background-color: var(--background);
}

.section-alt {
  background-color: var(--surface);
}

.section-eyebrow {
  display: block;
  margin-bottom: var(--space-2);
  color: var(--paper);
  font-weight: 800;
  text-transform: uppercase;
}

[data-template="light"] .section-eyebrow {
  color: var(--kraft);
}

.section-title {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  font-weight: 400;
  line-height: 1.1;
  color: var(--text-primary);
  text-shadow: 0 0 4px rgba(224, 168, 136, 0.4);
}

.section-lead {
  margin-top: var(--space-4);
  max-width: 48rem;
  font-size: var(--text-lg);
  color: var(--text-secondary);
}

.section-header {
  margin-bottom: var(--space-12);
}

/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 20;
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.site-header .container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: var(--header-height);
}

.site-logo {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  color: var(--text-primary);
}

.site-nav {
  display: flex;
  align-items: center;
  gap: var(--space-6);
}

.site-nav a {
  color: var(--text-secondary);
  font-weight: 500;
}

.site-nav a:hover {
  color: var(--text-primary);
}

/* Hero */
.hero {
  padding: var(--space-16) 0 var(--space-24);
}

.hero .container {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: var(--space-12);
  align-items: center;
}

.hero-title {
  font-family: var(--font-display);
  font-size: 4.5rem;
  font-weight: 400;
  line-height: 1.05;
  color: var(--text-primary);
}

.hero-body {
  margin: var(--space-6) 0 var(--space-8);
  font-size: var(--text-lg);
  color: var(--text-secondary);
}

.hero-image {
  width: 100%;
  height: auto;
  border-radius: var(--radius-lg);
}

/* Courses */
.course-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: var(--space-8);
}

.course-title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 400;
  color: var(--text-primary);
}

.course-price {
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--clay);
}

.course-bullets {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  padding-left: var(--space-6);
  color: var(--text-secondary);
}

.course-detail .card {
  max-width: 48rem;
}

/* Techniques */
.technique-tabs {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-8);
  border-bottom: 1px solid var(--border);
}

.technique-tab {
  padding: var(--space-3) var(--space-6);
  background: none;
  border: none;
  border-bottom: 2px solid transparent;
  color: var(--text-muted);
  font-family: var(--font-body);
  font-size: var(--text-base);
  cursor: pointer;
}

.technique-tab.active {
  border-bottom-color: var(--primary);
  color: var(--text-primary);
}

.technique-panel {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  align-items: center;
}

.technique-panel img {
  width: 100%;
  border-radius: var(--radius-lg);
}

.technique-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

/* About */
.about-text p + p {
  margin-top: var(--space-4);
}

.about-text {
  color: var(--text-secondary);
  font-size: var(--text-lg);
  line-height: 1.6;
}

/* Gallery */
.gallery-grid {
  columns: 3 280px;
  column-gap: var(--space-4);
}

.gallery-item {
  display: block;
  width: 100%;
  margin-bottom: var(--space-4);
  padding: 0;
  border: none;
  background: none;
  cursor: zoom-in;
  break-inside: avoid;
}

.gallery-item img {
  width: 100%;
  height: auto;
  border-radius: var(--radius-md);
  transition: transform var(--transition-normal) var(--easing-standard);
}

.gallery-item:hover img {
  transform: scale(1.02);
}

/* Lightbox */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 60;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: var(--overlay);
  outline: none;
}

.lightbox-image {
  max-width: 85vw;
  max-height: 85vh;
  border-radius: var(--radius-md);
  cursor: default;
}

.lightbox-nav,
.lightbox-close {
  position: absolute;
  background: none;
  border: none;
  color: #FFFFFF;
  font-size: 2.5rem;
  cursor: pointer;
}

.lightbox-nav.prev { left: var(--space-6); }
.lightbox-nav.next { right: var(--space-6); }
.lightbox-close { top: var(--space-4); right: var(--space-6); }

.lightbox-counter {
  position: absolute;
  bottom: var(--space-6);
  color: #FFFFFF;
}

/* Testimonials */
.testimonial-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: var(--space-8);
}

.testimonial-author {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.testimonial-author img {
  width: 56px;
  height: 56px;
  border-radius: 50%;
  object-fit: cover;
}

.testimonial-name {
  font-weight: 700;
  color: var(--text-primary);
}

.testimonial-byline {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.testimonial-comment {
  color: var(--text-secondary);
  font-style: italic;
}

/* Call to action */
.cta {
  text-align: center;
}

.cta .section-lead {
  margin: var(--space-4) auto var(--space-8);
}

/* Contact */
.contact .container {
  display: grid;
  grid-template-columns: 54fr 38fr;
  gap: var(--space-16);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
  margin-top: var(--space-8);
}

.contact-image {
  width: 100%;
  height: auto;
  border-radius: var(--radius-lg);
}

/* Footer */
.site-footer {
  padding: var(--space-16) 0 var(--space-8);
  background-color: var(--surface);
  color: var(--text-secondary);
}

.footer-grid {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: var(--space-8);
}

.footer-links {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.footer-legal {
  margin-top: var(--space-12);
  padding-top: var(--space-6);
  border-top: 1px solid var(--border);
  font-size: var(--text-sm);
  color: var(--text-muted);
}

@media (max-width: 900px) {
  .hero .container,
  .technique-panel,
  .contact .container {
    grid-template-columns: 1fr;
  }

  .hero-title {
    font-size: var(--text-2xl);
  }

  .section-title {
    font-size: var(--text-2xl);
  }

  .site-nav a {
    display: none;
  }
}
"#;
