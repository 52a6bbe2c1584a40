// the dark palette is selected by the "dark" class on the document root, which the
// page controller keeps in sync with the theme
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #8B5CF6;          /* Violet brand color */
  --primary-dark: #7C3AED;
  --secondary: #EC4899;        /* Pink */
  --accent: #F97316;           /* Orange */
  --on-primary: #FFFFFF;

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;
  --neutral-950: #030712;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --background-blur: rgba(255, 255, 255, 0.8);
  --surface: #FFFFFF;
  --muted: rgba(243, 244, 246, 0.5);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-muted: var(--neutral-500);

  /* Tints */
  --primary-tint: rgba(139, 92, 246, 0.1);
  --primary-tint-strong: rgba(139, 92, 246, 0.2);
  --secondary-tint: rgba(236, 72, 153, 0.1);
  --secondary-tint-strong: rgba(236, 72, 153, 0.2);
  --accent-tint: rgba(249, 115, 22, 0.1);

  /* Border Colors */
  --border: var(--neutral-200);
  --border-hover: rgba(139, 92, 246, 0.5);

  /* Layout */
  --header-height: 72px;
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-20: 80px;
  --space-32: 128px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-2xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-2xl: 0 25px 50px -12px rgba(0, 0, 0, 0.25);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

:root.dark {
  --primary: #A78BFA;
  --primary-dark: #8B5CF6;
  --secondary: #F472B6;
  --accent: #FB923C;
  --on-primary: var(--neutral-950);

  --background: var(--neutral-950);
  --background-blur: rgba(3, 7, 18, 0.8);
  --surface: var(--neutral-900);
  --muted: rgba(31, 41, 55, 0.5);

  --text-primary: var(--neutral-50);
  --text-muted: var(--neutral-400);

  --primary-tint: rgba(167, 139, 250, 0.1);
  --primary-tint-strong: rgba(167, 139, 250, 0.2);
  --secondary-tint: rgba(244, 114, 182, 0.1);
  --secondary-tint-strong: rgba(244, 114, 182, 0.2);
  --accent-tint: rgba(251, 146, 60, 0.1);

  --border: var(--neutral-800);
  --border-hover: rgba(167, 139, 250, 0.5);
}"#;
