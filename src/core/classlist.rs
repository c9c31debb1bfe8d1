//! The known class-name table and its loading rules.
//!
//! The built-in table is the list of public header names of the reference
//! toolkit, regenerated from a directory listing of its installed headers
//! (`find /usr/include/katie/ -name 'Q*' | sort -u`). A run can override it
//! with a plain-text file, one name per line.

use std::collections::HashSet;
use std::path::Path;

use crate::core::error::{Error, Result};

/// Built-in class-name table, one entry per public header.
pub const KNOWN_CLASSES: &[&str] = &[
    "QAbstractAnimation",
    "QAbstractButton",
    "QAbstractEventDispatcher",
    "QAbstractFileEngine",
    "QAbstractGraphicsShapeItem",
    "QAbstractItemDelegate",
    "QAbstractItemModel",
    "QAbstractItemView",
    "QAbstractListModel",
    "QAbstractNetworkCache",
    "QAbstractPageSetupDialog",
    "QAbstractPrintDialog",
    "QAbstractProxyModel",
    "QAbstractScrollArea",
    "QAbstractSlider",
    "QAbstractSocket",
    "QAbstractSpinBox",
    "QAbstractTableModel",
    "QAbstractTextDocumentLayout",
    "QAbstractUndoItem",
    "QAccessible",
    "QAccessible2Interface",
    "QAccessibleActionInterface",
    "QAccessibleApplication",
    "QAccessibleBridge",
    "QAccessibleBridgeFactoryInterface",
    "QAccessibleBridgePlugin",
    "QAccessibleEditableTextInterface",
    "QAccessibleEvent",
    "QAccessibleFactoryInterface",
    "QAccessibleImageInterface",
    "QAccessibleInterface",
    "QAccessibleInterfaceEx",
    "QAccessibleObject",
    "QAccessibleObjectEx",
    "QAccessiblePlugin",
    "QAccessibleSimpleEditableTextInterface",
    "QAccessibleTable2CellInterface",
    "QAccessibleTable2Interface",
    "QAccessibleTableInterface",
    "QAccessibleTextInterface",
    "QAccessibleValueInterface",
    "QAccessibleWidget",
    "QAccessibleWidgetEx",
    "QAction",
    "QActionEvent",
    "QActionGroup",
    "QAnimationGroup",
    "QApplication",
    "QArgument",
    "QAtomicInt",
    "QAtomicPointer",
    "QBasicTimer",
    "QBitArray",
    "QBitmap",
    "QBitRef",
    "QBoxLayout",
    "QBrush",
    "QBrushData",
    "QBuffer",
    "QButtonGroup",
    "QByteArray",
    "QByteArrayMatcher",
    "QByteRef",
    "QCache",
    "QCalendarWidget",
    "QChar",
    "QCharRef",
    "QCheckBox",
    "QChildEvent",
    "QCleanlooksStyle",
    "QClipboard",
    "QClipboardEvent",
    "QCloseEvent",
    "QColor",
    "QColorDialog",
    "QColumnView",
    "QComboBox",
    "QCommandLinkButton",
    "QCommonStyle",
    "QCompleter",
    "QContextMenuEvent",
    "QCoreApplication",
    "QCryptographicHash",
    "QCursor",
    "QCustomWidget",
    "QCustomWidgetPlugin",
    "QDataStream",
    "QDataWidgetMapper",
    "QDate",
    "QDateEdit",
    "QDateTime",
    "QDateTimeEdit",
    "QDBusAbstractAdaptor",
    "QDBusAbstractInterface",
    "QDBusAbstractInterfaceBase",
    "QDBusArgument",
    "QDBusConnection",
    "QDBusConnectionInterface",
    "QDBusContext",
    "QDBusError",
    "QDBusInterface",
    "QDBusMessage",
    "QDBusMetaType",
    "QDBusObjectPath",
    "QDBusPendingCall",
    "QDBusPendingCallWatcher",
    "QDBusPendingReply",
    "QDBusPendingReplyData",
    "QDBusReply",
    "QDBusServer",
    "QDBusServiceWatcher",
    "QDBusSignature",
    "QDBusUnixFileDescriptor",
    "QDBusVariant",
    "QDebug",
    "QDeclarativeAttachedPropertiesFunc",
    "QDeclarativeComponent",
    "QDeclarativeContext",
    "QDeclarativeEngine",
    "QDeclarativeError",
    "QDeclarativeExpression",
    "QDeclarativeExtensionInterface",
    "QDeclarativeExtensionPlugin",
    "QDeclarativeImageProvider",
    "QDeclarativeInfo",
    "QDeclarativeItem",
    "QDeclarativeListProperty",
    "QDeclarativeListReference",
    "QDeclarativeParserStatus",
    "QDeclarativeProperties",
    "QDeclarativeProperty",
    "QDeclarativePropertyMap",
    "QDeclarativePropertyValueInterceptor",
    "QDeclarativePropertyValueSource",
    "QDeclarativeScriptString",
    "QDeclarativeTypeInfo",
    "QDeclarativeView",
    "QDesktopServices",
    "QDesktopWidget",
    "QDial",
    "QDialog",
    "QDialogButtonBox",
    "QDir",
    "QDirIterator",
    "QDirModel",
    "QDockWidget",
    "QDomAttr",
    "QDomCDATASection",
    "QDomCharacterData",
    "QDomComment",
    "QDomDocument",
    "QDomDocumentFragment",
    "QDomDocumentType",
    "QDomElement",
    "QDomEntity",
    "QDomEntityReference",
    "QDomImplementation",
    "QDomNamedNodeMap",
    "QDomNode",
    "QDomNodeList",
    "QDomNotation",
    "QDomProcessingInstruction",
    "QDomText",
    "QDoubleSpinBox",
    "QDoubleValidator",
    "QDrag",
    "QDragEnterEvent",
    "QDragLeaveEvent",
    "QDragMoveEvent",
    "QDropEvent",
    "QDynamicPropertyChangeEvent",
    "QEasingCurve",
    "QElapsedTimer",
    "QErrorMessage",
    "QEvent",
    "QEventLoop",
    "QEventSizeOfChecker",
    "QExplicitlySharedDataPointer",
    "QFile",
    "QFileDialog",
    "QFileIconProvider",
    "QFileInfo",
    "QFileInfoList",
    "QFileSystemModel",
    "QFileSystemWatcher",
    "QFlag",
    "QFlags",
    "QFocusEvent",
    "QFocusFrame",
    "QFont",
    "QFontComboBox",
    "QFontDatabase",
    "QFontDialog",
    "QFontInfo",
    "QFontMetrics",
    "QFontMetricsF",
    "QFormLayout",
    "QFrame",
    "QFtp",
    "QFuture",
    "QFutureInterface",
    "QFutureInterfaceBase",
    "QFutureIterator",
    "QFutureSynchronizer",
    "QFutureWatcher",
    "QFutureWatcherBase",
    "QGenericArgument",
    "QGenericMatrix",
    "QGenericReturnArgument",
    "QGradient",
    "QGradientStop",
    "QGradientStops",
    "QGraphicsAnchor",
    "QGraphicsAnchorLayout",
    "QGraphicsBlurEffect",
    "QGraphicsColorizeEffect",
    "QGraphicsDropShadowEffect",
    "QGraphicsEffect",
    "QGraphicsEllipseItem",
    "QGraphicsGridLayout",
    "QGraphicsItem",
    "QGraphicsItemAnimation",
    "QGraphicsItemGroup",
    "QGraphicsLayout",
    "QGraphicsLayoutItem",
    "QGraphicsLinearLayout",
    "QGraphicsLineItem",
    "QGraphicsObject",
    "QGraphicsOpacityEffect",
    "QGraphicsPathItem",
    "QGraphicsPixmapItem",
    "QGraphicsPolygonItem",
    "QGraphicsProxyWidget",
    "QGraphicsRectItem",
    "QGraphicsRotation",
    "QGraphicsScale",
    "QGraphicsScene",
    "QGraphicsSceneContextMenuEvent",
    "QGraphicsSceneDragDropEvent",
    "QGraphicsSceneEvent",
    "QGraphicsSceneHelpEvent",
    "QGraphicsSceneHoverEvent",
    "QGraphicsSceneMouseEvent",
    "QGraphicsSceneMoveEvent",
    "QGraphicsSceneResizeEvent",
    "QGraphicsSceneWheelEvent",
    "QGraphicsSimpleTextItem",
    "QGraphicsTextItem",
    "QGraphicsView",
    "QGraphicsWidget",
    "QGridLayout",
    "QGroupBox",
    "QGuiPlatformPlugin",
    "QHash",
    "QHashData",
    "QHashIterator",
    "QHashNode",
    "QHBoxLayout",
    "QHeaderView",
    "QHelpEvent",
    "QHideEvent",
    "QHostAddress",
    "QHostInfo",
    "QHoverEvent",
    "QHttp",
    "QHttpHeader",
    "QHttpMultiPart",
    "QHttpPart",
    "QHttpRequestHeader",
    "QHttpResponseHeader",
    "QIcon",
    "QIconEngine",
    "QIconEngineFactoryInterface",
    "QIconEngineFactoryInterfaceV2",
    "QIconEnginePlugin",
    "QIconEnginePluginV2",
    "QIconEngineV2",
    "QIdentityProxyModel",
    "QImage",
    "QImageIOHandler",
    "QImageIOHandlerFactoryInterface",
    "QImageIOPlugin",
    "QImageReader",
    "QImageWriter",
    "QIncompatibleFlag",
    "QInputDialog",
    "QInputEvent",
    "QInternal",
    "QIntValidator",
    "QIODevice",
    "Q_IPV6ADDR",
    "QIPv6Address",
    "QItemDelegate",
    "QItemEditorCreator",
    "QItemEditorCreatorBase",
    "QItemEditorFactory",
    "QItemSelection",
    "QItemSelectionModel",
    "QItemSelectionRange",
    "QJsonDocument",
    "QKeyEvent",
    "QKeySequence",
    "QLabel",
    "QLatin1Char",
    "QLatin1String",
    "QLayout",
    "QLayoutItem",
    "QLCDNumber",
    "QLibrary",
    "QLibraryInfo",
    "QLine",
    "QLinearGradient",
    "QLineEdit",
    "QLineF",
    "QLinkedList",
    "QLinkedListData",
    "QLinkedListIterator",
    "QLinkedListNode",
    "QList",
    "QListData",
    "QListIterator",
    "QListView",
    "QListWidget",
    "QListWidgetItem",
    "QLocale",
    "QLocalServer",
    "QLocalSocket",
    "QMainWindow",
    "QMap",
    "QMapData",
    "QMapIterator",
    "QMapNode",
    "QMapPayloadNode",
    "QMargins",
    "QMatrix",
    "QMatrix2x2",
    "QMatrix2x3",
    "QMatrix2x4",
    "QMatrix3x2",
    "QMatrix3x3",
    "QMatrix3x4",
    "QMatrix4x2",
    "QMatrix4x3",
    "QMatrix4x4",
    "QMdiArea",
    "QMdiSubWindow",
    "QMenu",
    "QMenuBar",
    "QMessageBox",
    "QMetaClassInfo",
    "QMetaEnum",
    "QMetaMethod",
    "QMetaObject",
    "QMetaObjectAccessor",
    "QMetaProperty",
    "QMetaType",
    "QMetaTypeId",
    "QMetaTypeId2",
    "QMimeData",
    "QModelIndex",
    "QModelIndexList",
    "QMotifStyle",
    "QMouseEvent",
    "QMoveEvent",
    "QMovie",
    "QMultiHash",
    "QMultiMap",
    "QMutableFutureIterator",
    "QMutableHashIterator",
    "QMutableLinkedListIterator",
    "QMutableListIterator",
    "QMutableMapIterator",
    "QMutableSetIterator",
    "QMutableStringListIterator",
    "QMutableVectorIterator",
    "QMutex",
    "QMutexLocker",
    "QNetworkAccessManager",
    "QNetworkAddressEntry",
    "QNetworkCacheMetaData",
    "QNetworkCookie",
    "QNetworkCookieJar",
    "QNetworkDiskCache",
    "QNetworkInterface",
    "QNetworkReply",
    "QNetworkRequest",
    "QObject",
    "QObjectCleanupHandler",
    "QObjectData",
    "QObjectList",
    "QPageSetupDialog",
    "QPaintDevice",
    "QPaintEngine",
    "QPaintEngineState",
    "QPainter",
    "QPainterPath",
    "QPainterPathPrivate",
    "QPainterPathStroker",
    "QPaintEvent",
    "QPair",
    "QPalette",
    "QParallelAnimationGroup",
    "QPauseAnimation",
    "QPen",
    "QPersistentModelIndex",
    "Q_PID",
    "QPixmap",
    "QPixmapCache",
    "QPlainTextDocumentLayout",
    "QPlainTextEdit",
    "QPlastiqueStyle",
    "QPlugin",
    "QPluginLoader",
    "QPoint",
    "QPointer",
    "QPointF",
    "QPolygon",
    "QPolygonF",
    "QPrintDialog",
    "QPrintEngine",
    "QPrinter",
    "QPrinterInfo",
    "QPrintPreviewDialog",
    "QPrintPreviewWidget",
    "QProcess",
    "QProcessEnvironment",
    "QProgressBar",
    "QProgressDialog",
    "QPropertyAnimation",
    "QProxyModel",
    "QProxyStyle",
    "QPushButton",
    "QQueue",
    "QRadialGradient",
    "QRadioButton",
    "QRect",
    "QRectF",
    "QRegExp",
    "QRegExpValidator",
    "QRegion",
    "QResizeEvent",
    "QReturnArgument",
    "QRgb",
    "QRubberBand",
    "QRunnable",
    "QScopedPointer",
    "QScopedPointerPodDeleter",
    "QScopedValueRollback",
    "QScriptable",
    "QScriptClass",
    "QScriptClassPropertyIterator",
    "QScriptContext",
    "QScriptContextInfo",
    "QScriptContextInfoList",
    "QScriptEngine",
    "QScriptEngineAgent",
    "QScriptEngineDebugger",
    "QScriptExtensionInterface",
    "QScriptExtensionPlugin",
    "QScriptProgram",
    "QScriptString",
    "QScriptSyntaxCheckResult",
    "QScriptValue",
    "QScriptValueIterator",
    "QScriptValueList",
    "QScrollArea",
    "QScrollBar",
    "QSemaphore",
    "QSequentialAnimationGroup",
    "QSessionManager",
    "QSet",
    "QSetIterator",
    "QSettings",
    "QSharedData",
    "QSharedDataPointer",
    "QSharedPointer",
    "QShortcut",
    "QShortcutEvent",
    "QShowEvent",
    "QSignalMapper",
    "QSignalSpy",
    "QSize",
    "QSizeF",
    "QSizeGrip",
    "QSizePolicy",
    "QSlider",
    "QSocketNotifier",
    "QSortFilterProxyModel",
    "QSpacerItem",
    "QSpinBox",
    "QSplashScreen",
    "QSplitter",
    "QSplitterHandle",
    "QSpontaneKeyEvent",
    "QSsl",
    "QSslCertificate",
    "QSslCipher",
    "QSslConfiguration",
    "QSslError",
    "QSslKey",
    "QSslSocket",
    "QStack",
    "QStackedLayout",
    "QStackedWidget",
    "QStandardItem",
    "QStandardItemEditorCreator",
    "QStandardItemModel",
    "QStandardPaths",
    "QStatusBar",
    "QStatusTipEvent",
    "QString",
    "QStringList",
    "QStringListIterator",
    "QStringListModel",
    "QStringMatcher",
    "QStringRef",
    "QStyle",
    "QStyledItemDelegate",
    "QStyleFactory",
    "QStyleFactoryInterface",
    "QStyleHintReturn",
    "QStyleHintReturnMask",
    "QStyleHintReturnVariant",
    "QStyleOption",
    "QStyleOptionButton",
    "QStyleOptionComboBox",
    "QStyleOptionComplex",
    "QStyleOptionDockWidget",
    "QStyleOptionDockWidgetV2",
    "QStyleOptionFocusRect",
    "QStyleOptionFrame",
    "QStyleOptionFrameV2",
    "QStyleOptionFrameV3",
    "QStyleOptionGraphicsItem",
    "QStyleOptionGroupBox",
    "QStyleOptionHeader",
    "QStyleOptionMenuItem",
    "QStyleOptionProgressBar",
    "QStyleOptionProgressBarV2",
    "QStyleOptionRubberBand",
    "QStyleOptionSizeGrip",
    "QStyleOptionSlider",
    "QStyleOptionSpinBox",
    "QStyleOptionTab",
    "QStyleOptionTabBarBase",
    "QStyleOptionTabBarBaseV2",
    "QStyleOptionTabV2",
    "QStyleOptionTabV3",
    "QStyleOptionTabWidgetFrame",
    "QStyleOptionTabWidgetFrameV2",
    "QStyleOptionTitleBar",
    "QStyleOptionToolBar",
    "QStyleOptionToolBox",
    "QStyleOptionToolBoxV2",
    "QStyleOptionToolButton",
    "QStyleOptionViewItem",
    "QStyleOptionViewItemV2",
    "QStyleOptionViewItemV3",
    "QStyleOptionViewItemV4",
    "QStylePainter",
    "QStylePlugin",
    "QSvgRenderer",
    "QSyntaxHighlighter",
    "QSystemTrayIcon",
    "Qt",
    "QTabBar",
    "QTableView",
    "QTableWidget",
    "QTableWidgetItem",
    "QTableWidgetSelectionRange",
    "QTabWidget",
    "QtAlgorithms",
    "QtCleanUpFunction",
    "QtConcurrentFilter",
    "QtConcurrentMap",
    "QtConcurrentRun",
    "QtConfig",
    "QtContainerFwd",
    "QtCore",
    "QTcpServer",
    "QTcpSocket",
    "QtDBus",
    "QtDebug",
    "QtDeclarative",
    "QTemporaryFile",
    "QtEndian",
    "QTest",
    "QTestBasicStreamer",
    "QTestCoreElement",
    "QTestCoreList",
    "QTestData",
    "QTestDelayEvent",
    "QTestElement",
    "QTestElementAttribute",
    "QTestEvent",
    "QTestEventList",
    "QTestEventLoop",
    "QTestFileLogger",
    "QTestKeyClicksEvent",
    "QTestKeyEvent",
    "QTestLightXmlStreamer",
    "QTestMouseEvent",
    "QTestXmlStreamer",
    "QTestXunitStreamer",
    "QtEvents",
    "QTextBlock",
    "QTextBlockFormat",
    "QTextBlockGroup",
    "QTextBlockUserData",
    "QTextBoundaryFinder",
    "QTextBrowser",
    "QTextCharFormat",
    "QTextCodec",
    "QTextConverter",
    "QTextCursor",
    "QTextDecoder",
    "QTextDocument",
    "QTextDocumentFragment",
    "QTextDocumentWriter",
    "QTextEdit",
    "QTextEncoder",
    "QTextFormat",
    "QTextFragment",
    "QTextFrame",
    "QTextFrameFormat",
    "QTextFrameLayoutData",
    "QTextImageFormat",
    "QTextInlineObject",
    "QTextItem",
    "QTextLayout",
    "QTextLength",
    "QTextLine",
    "QTextList",
    "QTextListFormat",
    "QTextObject",
    "QTextObjectInterface",
    "QTextOption",
    "QTextStream",
    "QTextStreamFunction",
    "QTextStreamManipulator",
    "QTextTable",
    "QTextTableCell",
    "QTextTableCellFormat",
    "QTextTableFormat",
    "QtGlobal",
    "QtGui",
    "QThread",
    "QThreadPool",
    "QTileRules",
    "QTime",
    "QTimeEdit",
    "QTimeLine",
    "QTimer",
    "QTimerEvent",
    "QtMsgHandler",
    "QtNetwork",
    "QToolBar",
    "QToolBox",
    "QToolButton",
    "QToolTip",
    "QtPlugin",
    "QtPluginInstanceFunction",
    "QTransform",
    "QTranslator",
    "QTreeView",
    "QTreeWidget",
    "QTreeWidgetItem",
    "QTreeWidgetItemIterator",
    "QtScript",
    "QtScriptTools",
    "QtSvg",
    "QtTest",
    "QtTestGui",
    "QtUiTools",
    "QtXml",
    "QTypeInfo",
    "QUdpSocket",
    "QUiLoader",
    "QUndoCommand",
    "QUndoGroup",
    "QUndoStack",
    "QUndoView",
    "QUnixPrintWidget",
    "QUpdateLaterEvent",
    "QUrl",
    "QUrlInfo",
    "QUuid",
    "QValidator",
    "QVariant",
    "QVariantAnimation",
    "QVariantHash",
    "QVariantList",
    "QVariantMap",
    "QVarLengthArray",
    "QVBoxLayout",
    "QVector",
    "QVector2D",
    "QVector3D",
    "QVector4D",
    "QVectorData",
    "QVectorIterator",
    "QVectorTypedData",
    "QWaitCondition",
    "QWeakPointer",
    "QWhatsThis",
    "QWhatsThisClickedEvent",
    "QWheelEvent",
    "QWidget",
    "QWidgetAction",
    "QWidgetData",
    "QWidgetItem",
    "QWidgetItemV2",
    "QWidgetList",
    "QWidgetMapper",
    "QWidgetSet",
    "QWindowsStyle",
    "QWindowStateChangeEvent",
    "QWizard",
    "QWizardPage",
    "QWorkspace",
    "QX11EmbedContainer",
    "QX11EmbedWidget",
    "QX11Info",
    "QXmlAttributes",
    "QXmlContentHandler",
    "QXmlDeclHandler",
    "QXmlDefaultHandler",
    "QXmlDTDHandler",
    "QXmlEntityResolver",
    "QXmlErrorHandler",
    "QXmlInputSource",
    "QXmlLexicalHandler",
    "QXmlLocator",
    "QXmlNamespaceSupport",
    "QXmlParseException",
    "QXmlReader",
    "QXmlSimpleReader",
    "QXmlStreamAttribute",
    "QXmlStreamAttributes",
    "QXmlStreamEntityDeclaration",
    "QXmlStreamEntityDeclarations",
    "QXmlStreamEntityResolver",
    "QXmlStreamNamespaceDeclaration",
    "QXmlStreamNamespaceDeclarations",
    "QXmlStreamNotationDeclaration",
    "QXmlStreamNotationDeclarations",
    "QXmlStreamReader",
    "QXmlStreamWriter",
];

/// The identifier set driving a rewrite run. Loaded once, immutable after.
#[derive(Debug, Clone)]
pub struct ClassList {
    names: Vec<String>,
    index: HashSet<String>,
}

impl ClassList {
    /// The built-in table.
    pub fn builtin() -> Self {
        Self::from_names(KNOWN_CLASSES.iter().map(|n| n.to_string()))
    }

    /// Load a table from a file: one name per line, blank lines and `#`
    /// comments ignored. Entries must be plain identifiers.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::classlist_not_found(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
        })?;

        let names: Vec<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        if names.is_empty() {
            return Err(Error::classlist_empty(path.display().to_string()));
        }

        for name in &names {
            let valid = matches!(name.chars().next(), Some(c) if !c.is_ascii_digit())
                && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid {
                return Err(Error::classlist_invalid_name(
                    path.display().to_string(),
                    name.clone(),
                ));
            }
        }

        Ok(Self::from_names(names.into_iter()))
    }

    /// Resolve the table for a run: an explicit file overrides the built-in.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::builtin()),
        }
    }

    fn from_names(names: impl Iterator<Item = String>) -> Self {
        let mut index = HashSet::new();
        let mut unique = Vec::new();
        for name in names {
            if index.insert(name.clone()) {
                unique.push(name);
            }
        }
        ClassList {
            names: unique,
            index,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Regex alternation over all names, longest-first so a name is never
    /// shadowed by one of its prefixes.
    pub fn alternation(&self) -> String {
        let mut sorted: Vec<&str> = self.names.iter().map(String::as_str).collect();
        sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        sorted
            .iter()
            .map(|n| regex::escape(n))
            .collect::<Vec<_>>()
            .join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn builtin_contains_known_names() {
        let list = ClassList::builtin();
        assert!(list.contains("QWidget"));
        assert!(list.contains("QXmlStreamWriter"));
        assert!(!list.contains("NotAKnownType"));
    }

    #[test]
    fn builtin_table_is_unique() {
        let list = ClassList::builtin();
        assert_eq!(list.len(), KNOWN_CLASSES.len());
    }

    #[test]
    fn from_file_skips_blanks_and_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("classes.txt");
        std::fs::write(&path, "# toolkit classes\nQWidget\n\n  QObject  \n").unwrap();

        let list = ClassList::from_file(&path).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("QWidget"));
        assert!(list.contains("QObject"));
    }

    #[test]
    fn from_file_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = ClassList::from_file(&dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(err.code, crate::core::error::ErrorCode::ClasslistNotFound);
    }

    #[test]
    fn from_file_empty_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "# only a comment\n\n").unwrap();

        let err = ClassList::from_file(&path).unwrap_err();
        assert_eq!(err.code, crate::core::error::ErrorCode::ClasslistEmpty);
    }

    #[test]
    fn from_file_rejects_non_identifier() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "QWidget\nQList<int>\n").unwrap();

        let err = ClassList::from_file(&path).unwrap_err();
        assert_eq!(err.code, crate::core::error::ErrorCode::ClasslistInvalidName);
    }

    #[test]
    fn load_without_override_uses_builtin() {
        let list = ClassList::load(None).unwrap();
        assert_eq!(list.len(), KNOWN_CLASSES.len());
    }

    #[test]
    fn duplicate_names_collapse() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dup.txt");
        std::fs::write(&path, "QWidget\nQWidget\n").unwrap();

        let list = ClassList::from_file(&path).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn alternation_orders_longer_names_first() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("two.txt");
        std::fs::write(&path, "QWidget\nQWidgetAction\n").unwrap();

        let list = ClassList::from_file(&path).unwrap();
        assert_eq!(list.alternation(), "QWidgetAction|QWidget");
    }
}
