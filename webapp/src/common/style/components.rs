pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              opacity var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: 1px solid transparent;
  outline: none;
  background: none;
  color: inherit;
}

.btn:focus-visible {
  box-shadow: 0 0 0 3px var(--primary-tint-strong);
}

.btn:active {
  transform: translateY(1px);
}

.btn-default {
  background-color: var(--primary);
  color: var(--on-primary);
}

.btn-default:hover {
  background-color: var(--primary-dark);
}

.btn-outline {
  border-color: var(--border);
  background-color: var(--background);
}

.btn-outline:hover {
  background-color: var(--muted);
}

.btn-ghost:hover {
  background-color: var(--muted);
}

.btn-lg {
  padding: var(--space-3) var(--space-8);
  height: 44px;
  font-size: 1rem;
}

.btn-icon {
  width: 40px;
  height: 40px;
  padding: 0;
}

.btn-rounded {
  border-radius: var(--radius-full);
}

.btn-gradient {
  background: linear-gradient(to right, var(--primary), var(--secondary), var(--accent));
  color: white;
}

.btn-gradient:hover {
  opacity: 0.9;
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  overflow: hidden;
  transition: border-color var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.card-content {
  padding: var(--space-6);
}

/* Icons */
.icon {
  display: inline-block;
  flex-shrink: 0;
  vertical-align: middle;
}

/* Pills */
.pill {
  display: inline-block;
  padding: var(--space-2) var(--space-4);
  background-color: var(--primary-tint);
  color: var(--primary);
  border-radius: var(--radius-full);
  font-size: 0.875rem;
  font-weight: 500;
}

/* Animations */
@keyframes fade-in {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-10px); }
}

.animate-fade-in {
  animation: fade-in 0.6s ease-out both;
}

.animate-float {
  display: inline-block;
  animation: float 3s ease-in-out infinite;
}
"#;
