pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8 py-10";
pub const MACHINE_CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-8 pb-6 max-w-md w-full mx-auto";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const BALANCE: &str = "px-4 py-2 rounded-full bg-gray-100 dark:bg-gray-700 text-xl font-bold text-gray-900 dark:text-white";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-6 py-2 rounded-lg font-bold text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700";
pub const REEL_ROW: &str = "flex justify-center space-x-4";
pub const REEL: &str = "flex items-center justify-center w-20 h-24 rounded-xl bg-gray-100 dark:bg-gray-900 border-2 border-gray-300 dark:border-gray-600 text-5xl select-none";
pub const REEL_SPINNING: &str = "animate-pulse";
pub const HISTORY_ITEM: &str = "flex items-center justify-between px-4 py-2 rounded-lg bg-gray-50 dark:bg-gray-900";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_SECONDARY: &str = "text-gray-600 dark:text-gray-400";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_HINT: &str = "text-xs text-gray-500 dark:text-gray-400 mt-1";
pub const TEXT_WIN: &str = "font-bold text-green-500 dark:text-green-400";
pub const TEXT_LOSE: &str = "font-bold text-red-500 dark:text-red-400";
