pub const HOME_STYLES: &str = r#"
/* Landing Page Styles */

/* General Layout */
.page {
  min-height: 100vh;
  background-color: var(--background);
  color: var(--text-primary);
  transition: background-color var(--transition-normal), color var(--transition-normal);
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.page-section {
  padding: var(--space-20) var(--space-4);
}

.page-section.muted {
  background-color: var(--muted);
}

.section-header {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.section-subtitle {
  font-size: 1.25rem;
  color: var(--text-muted);
}

.text-gradient {
  background: linear-gradient(to right, var(--primary), var(--secondary), var(--accent));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* Navigation */
.app-header {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  background-color: var(--background-blur);
  backdrop-filter: blur(16px);
  border-bottom: 1px solid var(--border);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.brand {
  font-size: 1.5rem;
  font-weight: 700;
}

.nav-links {
  display: none;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-muted);
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary);
}

@media (min-width: 768px) {
  .nav-links {
    display: flex;
  }
}

/* Hero Section */
.hero {
  display: flex;
  align-items: center;
  min-height: 100vh;
  padding: var(--space-32) var(--space-4) var(--space-20);
}

.hero-content {
  max-width: 896px;
  margin: 0 auto;
  text-align: center;
}

.hero-badge {
  margin-bottom: var(--space-6);
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  line-height: 1.15;
  margin-bottom: var(--space-6);
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-muted);
  max-width: 672px;
  margin: 0 auto var(--space-8);
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-8);
  max-width: 672px;
  margin: var(--space-20) auto 0;
}

.stat-value {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.stat-label {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.tone-primary { color: var(--primary); }
.tone-secondary { color: var(--secondary); }
.tone-accent { color: var(--accent); }

@media (min-width: 768px) {
  .hero-title {
    font-size: 4.5rem;
  }

  .section-title {
    font-size: 3rem;
  }
}

/* Portfolio */
.card-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-6);
}

@media (min-width: 768px) {
  .card-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
  .card-grid { grid-template-columns: repeat(4, 1fr); }
}

.portfolio-card {
  cursor: pointer;
  border-width: 2px;
}

.portfolio-card:hover {
  border-color: var(--border-hover);
  transform: scale(1.05);
  box-shadow: var(--shadow-2xl);
}

.portfolio-tile {
  width: 64px;
  height: 64px;
  border-radius: var(--radius-2xl);
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: var(--space-4);
  color: white;
  transition: transform var(--transition-normal);
}

.portfolio-card:hover .portfolio-tile {
  transform: scale(1.1);
}

.portfolio-title {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.portfolio-count {
  font-size: 0.875rem;
  color: var(--text-muted);
  margin-bottom: var(--space-3);
}

.portfolio-more {
  display: flex;
  align-items: center;
  gap: var(--space-1);
  color: var(--primary);
  font-size: 0.875rem;
  font-weight: 500;
  transition: transform var(--transition-normal);
}

.portfolio-card:hover .portfolio-more {
  transform: translateX(8px);
}

.portfolio-footer {
  margin-top: var(--space-16);
  text-align: center;
}

/* Services */
.service {
  text-align: center;
}

.service-tile {
  width: 80px;
  height: 80px;
  border-radius: var(--radius-2xl);
  background: linear-gradient(135deg, var(--primary-tint-strong), var(--secondary-tint-strong));
  color: var(--primary);
  display: flex;
  align-items: center;
  justify-content: center;
  margin: 0 auto var(--space-4);
  transition: transform var(--transition-normal);
}

.service:hover .service-tile {
  transform: scale(1.1);
}

.service-title {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.service-desc {
  color: var(--text-muted);
}

/* About */
.about {
  max-width: 768px;
  margin: 0 auto;
}

.about .section-title {
  text-align: center;
  margin-bottom: var(--space-8);
}

.about-card {
  padding: var(--space-8);
  border-width: 2px;
}

.about-card .card-content {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.about-text {
  font-size: 1.125rem;
  line-height: 1.625;
}

.about-text.muted {
  color: var(--text-muted);
}

.tool-tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3);
  padding-top: var(--space-4);
}

/* Contact */
.contact {
  max-width: 672px;
  margin: 0 auto;
  text-align: center;
}

.contact .section-title {
  margin-bottom: var(--space-8);
}

.contact .section-subtitle {
  margin-bottom: var(--space-8);
}

.contact-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-6);
  margin-bottom: var(--space-12);
}

@media (min-width: 768px) {
  .contact-grid { grid-template-columns: repeat(3, 1fr); }
}

.contact-card:hover {
  border-color: var(--border-hover);
}

.contact-card .card-content {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-3);
}

.contact-icon {
  width: 48px;
  height: 48px;
  border-radius: var(--radius-full);
  display: flex;
  align-items: center;
  justify-content: center;
}

.contact-icon.tone-primary { background-color: var(--primary-tint); }
.contact-icon.tone-secondary { background-color: var(--secondary-tint); }
.contact-icon.tone-accent { background-color: var(--accent-tint); }

.contact-label {
  font-size: 0.875rem;
  font-weight: 500;
}

.contact-value {
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* Footer */
.page-footer {
  padding: var(--space-8) var(--space-4);
  border-top: 1px solid var(--border);
  text-align: center;
  color: var(--text-muted);
}
"#;
