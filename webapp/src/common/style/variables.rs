pub const CSS_VARIABLES: &str = r#"
:root {
  --primary: #4F46E5;
  --primary-dark: #4338CA;
  --primary-tint: rgba(79, 70, 229, 0.1);

  --neutral-50: #FAFAF9;
  --neutral-100: #F5F5F4;
  --neutral-200: #E7E5E4;
  --neutral-300: #D6D3D1;
  --neutral-500: #78716C;
  --neutral-600: #57534E;
  --neutral-900: #1C1917;

  --error: #DC2626;
  --error-tint: #FEF2F2;

  --background: var(--neutral-100);
  --surface: #FFFFFF;

  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);

  --border: var(--neutral-200);

  --header-height: 56px;
  --container-width: 1200px;

  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;

  --radius-md: 6px;
  --radius-lg: 10px;

  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 12px 24px -6px rgba(0, 0, 0, 0.18);

  --transition-fast: 150ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
