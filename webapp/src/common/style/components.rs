pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  border: none;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.btn:disabled {
  opacity: 0.6;
  cursor: progress;
}

.btn-primary {
  background-color: var(--primary);
  color: white;
}

.btn-primary:hover:not(:disabled) {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--neutral-200);
  color: var(--text-primary);
}

.btn-secondary:hover {
  background-color: var(--neutral-300);
}

.btn-close {
  background: none;
  border: none;
  font-size: 1.5rem;
  line-height: 1;
  color: var(--text-tertiary);
  cursor: pointer;
}

/* Forms */
.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.form-label {
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input {
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  font-size: 1rem;
}

.form-input:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 3px var(--primary-tint);
}

.form-input.invalid {
  border-color: var(--error);
}

.form-error {
  color: var(--error);
  font-size: 0.875rem;
}

/* Modal */
.modal-overlay {
  position: fixed;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.4);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.modal-content {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
  width: 100%;
  max-width: 480px;
  margin: var(--space-4);
}

.modal-header,
.modal-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-4);
}

.modal-header {
  border-bottom: 1px solid var(--border);
}

.modal-title {
  font-size: 1.125rem;
}

.modal-body {
  padding: var(--space-4);
}

.modal-buttons {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  margin-left: auto;
}

/* Search */
.search-bar {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.search-input {
  flex: 1;
}

.search-status {
  color: var(--text-tertiary);
  white-space: nowrap;
}

/* States */
.loading-state {
  display: flex;
  justify-content: center;
  padding: var(--space-8);
}

.loading-state.centered {
  min-height: calc(100vh - var(--header-height));
  align-items: center;
}

.loader {
  width: 32px;
  height: 32px;
  border: 3px solid var(--neutral-200);
  border-top-color: var(--primary);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.empty-state {
  padding: var(--space-8) var(--space-4);
  text-align: center;
  color: var(--text-secondary);
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  margin-top: var(--space-4);
}

.error-state {
  padding: var(--space-4);
  color: var(--error);
  background-color: var(--error-tint);
  border-radius: var(--radius-lg);
  margin-top: var(--space-4);
}

.notice {
  padding-top: var(--space-8);
  text-align: center;
}
"#;
