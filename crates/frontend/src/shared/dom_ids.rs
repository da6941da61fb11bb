//! Element ids and marker classes the server-rendered page and its
//! stylesheet rely on. Components render these verbatim.

// Modals
pub const MODAL_CREATE_SUBSCRIBER: &str = "create-subscriber-modal";
pub const MODAL_EDIT_SUBSCRIBER: &str = "edit-subscriber-modal";
pub const MODAL_EDIT_USER: &str = "edit-user-modal";
pub const MODAL_CREATE_USER: &str = "create-user-modal";
pub const MODAL_PAYMENT: &str = "payment-modal";

// Phone row containers
pub const PHONE_INPUTS: &str = "phone-inputs";
pub const EDIT_PHONE_INPUTS: &str = "edit-phone-inputs";

// Edit subscriber form
pub const EDIT_SUBSCRIBER_FORM: &str = "edit-subscriber-form";
pub const EDIT_SUBSCRIBER_ID: &str = "edit-subscriber-id";
pub const EDIT_FULL_NAME: &str = "edit-full-name";
pub const EDIT_CLIENT_TYPE: &str = "edit-client-type";
pub const EDIT_ADDRESS: &str = "edit-address";

// Edit user form
pub const EDIT_USER_FORM: &str = "edit-user-form";
pub const EDIT_USER_ID: &str = "edit-user-id";
pub const EDIT_USERNAME: &str = "edit-username";
pub const EDIT_ROLE: &str = "edit-role";

// Payment modal
pub const PAYMENT_SUBSCRIBER_ID: &str = "payment-subscriber-id";
pub const PAYMENT_SUBSCRIBER_NAME: &str = "payment-subscriber-name";
pub const PAYMENT_CURRENT_DEBT: &str = "payment-current-debt";

// Order form
pub const SELECTED_CLIENT_TYPE: &str = "selected-client-type";
pub const PRICE_NEW: &str = "price-new";
pub const PRICE_EXCHANGE: &str = "price-exchange";
pub const PRICE_WATER: &str = "price-water";
pub const ORDER_TOTAL: &str = "order-total";
pub const ORDER_DEBT: &str = "order-debt";

// Marker classes
pub const CLASS_OPEN_MARKER: &str = "active";
pub const CLASS_MODAL_OVERLAY: &str = "modal-overlay";
pub const CLASS_PHONE_ROW: &str = "phone-row";
pub const CLASS_REMOVE_PHONE: &str = "btn-remove-phone";
pub const CLASS_FORM_CONTROL: &str = "form-control";

// Globals injected by the page before the bundle runs
pub const GLOBAL_PRICES: &str = "currentPrices";
pub const GLOBAL_PRICE_ROWS: &str = "currentPriceRows";
pub const GLOBAL_ORDERS: &str = "currentOrders";
pub const GLOBAL_SUBSCRIBERS: &str = "currentSubscribers";
pub const GLOBAL_USERS: &str = "currentUsers";
