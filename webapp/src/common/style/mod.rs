use constcat::concat;

mod components;
mod variables;

pub use components::BASE_COMPONENTS;
pub use variables::CSS_VARIABLES;

pub const MODERN_STYLES: &str = concat!(
    r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
.app-header {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.brand {
  font-weight: 600;
  font-size: 1.25rem;
  color: var(--text-primary);
}

.nav-links {
  display: flex;
  gap: var(--space-4);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
}

.nav-link.active {
  color: var(--primary);
  background-color: var(--primary-tint);
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-6) var(--space-4);
}

.with-sticky {
  display: flex;
  flex-direction: column;
  min-height: calc(100vh - var(--header-height));
}

.sticky-header {
  position: sticky;
  top: var(--header-height);
  background-color: var(--background);
  padding-bottom: var(--space-4);
  z-index: 5;
}

.page-header h1 {
  font-size: 1.75rem;
  margin-bottom: var(--space-4);
}

.scrollable-content {
  flex: 1;
  padding-bottom: var(--space-4);
}

.breadcrumb {
  margin-bottom: var(--space-4);
  color: var(--text-tertiary);
}

/* Collections */
.collection-card {
  display: flex;
  flex-direction: column;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  overflow: hidden;
  color: var(--text-primary);
  transition: box-shadow var(--transition-fast) var(--easing-standard);
}

.collection-card:hover {
  box-shadow: var(--shadow-lg);
}

.collection-thumbnail {
  height: 120px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2.5rem;
  background-color: var(--neutral-200);
}

.collection-info {
  padding: var(--space-3);
}

.collection-title {
  font-size: 1.125rem;
  font-weight: 600;
  overflow-wrap: anywhere;
}

.collection-metadata {
  display: flex;
  gap: var(--space-4);
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.collection-detail-header {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-4);
  box-shadow: var(--shadow-sm);
}

.collection-detail-header h1 {
  margin-bottom: var(--space-2);
  overflow-wrap: anywhere;
}
"#
);
