pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-8);
  border: 1px solid transparent;
  border-radius: var(--radius-sm);
  font-family: var(--font-body);
  font-size: var(--text-base);
  font-weight: 700;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
  color var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  text-decoration: none;
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-primary {
  background-color: var(--primary);
  color: #FFFFFF;
}

.btn-primary:hover:not(:disabled) {
  background-color: var(--primary-hover);
}

.btn-outline {
  background-color: transparent;
  border-color: var(--text-secondary);
  color: var(--text-secondary);
}

.btn-outline:hover {
  background-color: var(--surface-raised);
}

.btn-icon {
  width: 40px;
  height: 40px;
  padding: 0;
  border-radius: 50%;
  background-color: transparent;
  border-color: var(--border);
  color: var(--text-primary);
}

/* Cards */
.card {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  padding: var(--space-8);
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
}

/* Forms */
.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  width: 100%;
}

.form-label {
  color: var(--text-secondary);
  font-size: var(--text-base);
}

.form-input {
  width: 100%;
  padding: var(--space-3);
  background-color: rgba(8, 7, 5, 0.05);
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  color: var(--text-primary);
  font-family: var(--font-body);
  font-size: var(--text-base);
}

.form-input:focus {
  outline: 2px solid var(--primary);
  outline-offset: 1px;
}

.form-check {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  color: var(--text-secondary);
  cursor: pointer;
}

/* Rating */
.rating {
  display: flex;
  gap: var(--space-1);
  color: var(--clay);
  font-size: var(--text-lg);
}

.rating .star-empty {
  color: var(--border);
}

/* Loading state */
.skeleton {
  background: linear-gradient(
    90deg,
    var(--skeleton-base) 25%,
    var(--skeleton-shine) 50%,
    var(--skeleton-base) 75%
  );
  background-size: 200% 100%;
  animation: skeleton-loading 1.5s infinite;
  border-radius: var(--radius-md);
  height: 1em;
}

@keyframes skeleton-loading {
  0% { background-position: -200% 0; }
  100% { background-position: 200% 0; }
}

/* Modal */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
  background-color: rgba(0, 0, 0, 0.6);
  backdrop-filter: blur(4px);
}

.modal {
  width: 100%;
  max-width: 28rem;
  overflow: hidden;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
}

.modal-header {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  padding: var(--space-6);
}

.modal-success .modal-header {
  background-color: rgba(139, 115, 85, 0.2);
}

.modal-error .modal-header {
  background-color: rgba(127, 29, 29, 0.2);
}

.modal-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  border-radius: 50%;
  color: #FFFFFF;
  font-size: var(--text-lg);
}

.modal-success .modal-icon {
  background-color: var(--primary);
}

.modal-error .modal-icon {
  background-color: var(--danger);
}

.modal-title {
  flex: 1;
  font-family: var(--font-display);
  font-size: 1.5rem;
  font-weight: 400;
  color: var(--text-primary);
}

.modal-body {
  padding: var(--space-6);
  color: var(--text-secondary);
  font-size: 1.125rem;
  line-height: 1.6;
}

.modal-footer {
  padding: 0 var(--space-6) var(--space-6);
}

.modal-footer .btn {
  width: 100%;
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 0 var(--space-8);
}

.visually-hidden {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0 0 0 0);
  white-space: nowrap;
}
"#;
