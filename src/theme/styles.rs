//! Global CSS styles for Lenster.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --brand: #8b5cf6;
  --brand-dark: #6d28d9;
  --gray-50: #f9fafb;
  --gray-100: #f3f4f6;
  --gray-200: #e5e7eb;
  --gray-500: #6b7280;
  --gray-800: #1f2937;
  --gray-900: #111827;
  --danger: #ef4444;
  --success: #22c55e;

  --bg: var(--gray-100);
  --surface: #ffffff;
  --text: var(--gray-900);
  --muted: var(--gray-500);
  --border: var(--gray-200);
  --hover: var(--gray-100);

  --font-sans: 'Inter', -apple-system, 'Segoe UI', sans-serif;
  --radius: 12px;
  --transition-fast: 150ms ease;
}

.app.dark {
  --bg: #000000;
  --surface: var(--gray-900);
  --text: var(--gray-50);
  --muted: #9ca3af;
  --border: #374151;
  --hover: var(--gray-800);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
}

.app {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text);
}

.page {
  padding: 1.25rem;
}

.muted, .drawer-muted, .fallback-hint {
  color: var(--muted);
}

.divider {
  border-bottom: 1px solid var(--border);
}

/* === Navbar === */
.navbar {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1.25rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.navbar-menu {
  background: none;
  border: none;
  color: inherit;
  cursor: pointer;
  font-size: 1.5rem;
}

.navbar-avatar, .switch-avatar {
  width: 2rem;
  height: 2rem;
  border-radius: 9999px;
  border: 1px solid var(--border);
}

.navbar-title {
  font-weight: 700;
  color: var(--brand);
  text-decoration: none;
}

.navbar-badges {
  margin-left: auto;
  display: flex;
  gap: 0.25rem;
}

.badge {
  font-size: 0.75rem;
  padding: 0.125rem 0.5rem;
  border-radius: 9999px;
  color: #fff;
}

.badge-mod { background: var(--success); }
.badge-staff { background: var(--danger); }

/* === Mobile Drawer === */
.mobile-drawer {
  position: fixed;
  inset: 0;
  z-index: 10;
  overflow-y: auto;
  padding: 1rem 0;
  background: var(--bg);
}

.drawer-close {
  padding: 0 1.25rem;
}

.drawer-body {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.drawer-identity {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-top: 0.5rem;
  padding: 0.75rem 1.25rem;
  background: none;
  border: none;
  color: inherit;
  text-align: left;
  cursor: pointer;
}

.drawer-identity:hover { background: var(--border); }

.drawer-avatar {
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  border: 1px solid var(--border);
}

.drawer-handle {
  font-weight: 700;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.drawer-section {
  background: var(--surface);
}

.drawer-item {
  display: block;
  width: 100%;
  padding: 0.75rem 1rem;
  background: none;
  border: none;
  color: inherit;
  font: inherit;
  text-align: left;
  text-decoration: none;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.drawer-item:hover { background: var(--hover); }

.drawer-version {
  padding: 0.5rem 1.25rem;
  font-size: 0.75rem;
  color: var(--muted);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  text-decoration: none;
}

.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: var(--brand); color: #fff; border: 1px solid var(--brand-dark); }
.btn-secondary { background: transparent; color: var(--brand); border: 1px solid var(--brand); }

.close-btn {
  background: none;
  border: none;
  color: inherit;
  font-size: 1.75rem;
  line-height: 1;
  cursor: pointer;
}

/* === Spinner === */
.spinner {
  width: 3rem;
  height: 3rem;
  border: 2px solid var(--border);
  border-top-color: var(--brand);
  border-radius: 9999px;
  animation: spin 0.8s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

/* === Cards & Layout === */
.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.card-body { padding: 1.25rem; }

.grid-layout {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1.25rem;
}

.grid-eight { display: flex; flex-direction: column; gap: 1.25rem; }

@media (min-width: 768px) {
  .grid-layout { grid-template-columns: 1fr 2fr; }
}

.settings-sidebar {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.sidebar-item {
  padding: 0.5rem 0.75rem;
  border-radius: 0.5rem;
  color: inherit;
  text-decoration: none;
}

.sidebar-item.active { background: var(--border); font-weight: 600; }

/* === Forms === */
.profile-form { display: flex; flex-direction: column; gap: 1rem; }

.input-label { display: block; margin-bottom: 0.25rem; font-weight: 500; }

.input-row { display: flex; align-items: center; }

.input-prefix {
  padding: 0.5rem;
  color: var(--muted);
  border: 1px solid var(--border);
  border-right: none;
  border-radius: 0.5rem 0 0 0.5rem;
}

.input-field {
  width: 100%;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  background: var(--surface);
  color: var(--text);
  font: inherit;
}

.input-field:focus { outline: 2px solid var(--brand); }
.input-field.invalid { border-color: var(--danger); }
.input-field.textarea { resize: vertical; }
.input-error { margin-top: 0.25rem; font-size: 0.875rem; color: var(--danger); }

.form-actions { display: flex; justify-content: flex-end; align-items: center; gap: 0.75rem; }
.form-saved { color: var(--success); font-size: 0.875rem; }

.picture-editor { display: flex; flex-direction: column; gap: 1rem; }
.picture-preview { width: 15rem; height: 15rem; border-radius: var(--radius); object-fit: cover; }

/* === Modals === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 20;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.5);
}

.modal {
  width: min(28rem, 90vw);
  background: var(--surface);
  border-radius: var(--radius);
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem 1.25rem;
  border-bottom: 1px solid var(--border);
}

.modal-body { padding: 1.25rem; display: flex; flex-direction: column; gap: 1rem; }

.profile-switcher { list-style: none; display: flex; flex-direction: column; gap: 0.25rem; }

.switch-item {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  width: 100%;
  padding: 0.5rem;
  background: none;
  border: none;
  border-radius: 0.5rem;
  color: inherit;
  cursor: pointer;
}

.switch-item.active, .switch-item:hover { background: var(--hover); }

/* === Pages === */
.home, .simple-page, .user-profile {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  align-items: flex-start;
}

.home-actions { display: flex; gap: 0.5rem; }
.page-title { font-size: 2rem; }
.profile-avatar { width: 8rem; height: 8rem; border-radius: 9999px; }

.page-loading, .page-fallback {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  min-height: 60vh;
  text-align: center;
}

.fallback-code { font-size: 3rem; }
"#;
